use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Values of one category row keyed by series name. `None` means no data.
pub type SeriesValues = IndexMap<String, Option<f64>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `DESC` (any case) sorts descending; every other name sorts ascending.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Decides which values count as "empty" when pruning series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmptyValuePolicy {
    /// Missing, zero and `NaN` values are empty.
    #[default]
    ZeroIsEmpty,
    /// Only missing and `NaN` values are empty; zero is real data.
    MissingOnly,
}

impl EmptyValuePolicy {
    #[must_use]
    pub fn is_empty(self, value: Option<f64>) -> bool {
        match value {
            None => true,
            Some(v) if v.is_nan() => true,
            Some(v) => match self {
                Self::ZeroIsEmpty => v == 0.0,
                Self::MissingOnly => false,
            },
        }
    }
}

/// Category-indexed rows of series values.
///
/// Rows keep insertion order until sorted. Inner series sets may differ
/// between rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    rows: IndexMap<String, SeriesValues>,
}

impl Dataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a row. Returns the replaced row, if any.
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        values: SeriesValues,
    ) -> Option<SeriesValues> {
        self.rows.insert(category.into(), values)
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<&SeriesValues> {
        self.rows.get(category)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeriesValues)> {
        self.rows
            .iter()
            .map(|(category, values)| (category.as_str(), values))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut SeriesValues)> {
        self.rows
            .iter_mut()
            .map(|(category, values)| (category.as_str(), values))
    }

    /// Series names in order of first appearance across rows.
    #[must_use]
    pub fn series_names(&self) -> Vec<String> {
        let names: IndexSet<&str> = self
            .rows
            .values()
            .flat_map(|values| values.keys().map(String::as_str))
            .collect();
        names.into_iter().map(str::to_owned).collect()
    }

    /// Reorders rows by lexicographic category key.
    pub fn sort(&mut self, direction: SortDirection) {
        match direction {
            SortDirection::Asc => self.rows.sort_keys(),
            SortDirection::Desc => self.rows.sort_by(|a, _, b, _| b.cmp(a)),
        }
    }

    #[must_use]
    pub fn sorted(mut self, direction: SortDirection) -> Self {
        self.sort(direction);
        self
    }
}

impl<K: Into<String>> FromIterator<(K, SeriesValues)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (K, SeriesValues)>>(iter: I) -> Self {
        Self {
            rows: iter
                .into_iter()
                .map(|(category, values)| (category.into(), values))
                .collect(),
        }
    }
}

/// Builds a row from `(name, value)` pairs.
pub fn series_values<K, V, I>(values: I) -> SeriesValues
where
    K: Into<String>,
    V: Into<Option<f64>>,
    I: IntoIterator<Item = (K, V)>,
{
    values
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}
