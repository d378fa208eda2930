use std::fmt;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

use super::json_writer;

/// Insertion-ordered mapping node of the options tree.
pub type OptionMap = IndexMap<String, OptionValue>;

/// Code fragment emitted verbatim (unquoted) by the JSON writer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawExpression(String);

impl RawExpression {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Schema-less chart option node.
///
/// Mirrors the JSON data model plus a `Raw` leaf for expressions that must
/// reach the charting library as code rather than as string literals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OptionValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    Str(String),
    Seq(Vec<OptionValue>),
    Map(OptionMap),
    Raw(RawExpression),
}

impl OptionValue {
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(RawExpression::new(text))
    }

    /// Short type name used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Seq(_) => "sequence",
            Self::Map(_) => "mapping",
            Self::Raw(_) => "raw expression",
        }
    }

    #[must_use]
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&OptionMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_seq(&self) -> Option<&[OptionValue]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric view of `Int` and `Float` leaves.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(value.into_inner()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_raw(&self) -> Option<&RawExpression> {
        match self {
            Self::Raw(expr) => Some(expr),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_map(self) -> Option<OptionMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a nested value by dotted path, e.g. `xAxis.0.categories`.
    ///
    /// Numeric segments index sequences; other segments index mappings.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&OptionValue> {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| match node {
                Self::Map(map) => map.get(segment),
                Self::Seq(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }

    #[must_use]
    pub fn contains_raw(&self) -> bool {
        match self {
            Self::Raw(_) => true,
            Self::Seq(items) => items.iter().any(Self::contains_raw),
            Self::Map(map) => map.values().any(Self::contains_raw),
            _ => false,
        }
    }

    /// Compact JSON with raw expressions written verbatim.
    pub fn to_json_string(&self) -> ChartResult<String> {
        json_writer::to_json_string(self)
    }

    /// Indented JSON with raw expressions written verbatim.
    pub fn to_json_string_pretty(&self) -> ChartResult<String> {
        json_writer::to_json_string_pretty(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse options json: {e}")))
    }
}

/// Looks up a dotted path starting at a mapping node.
#[must_use]
pub fn lookup_path<'a>(map: &'a OptionMap, path: &str) -> Option<&'a OptionValue> {
    let (head, rest) = path.split_once('.').unwrap_or((path, ""));
    map.get(head).and_then(|value| value.get_path(rest))
}

/// Parses a JSON object into a mapping node.
pub fn map_from_json_str(input: &str) -> ChartResult<OptionMap> {
    let value = OptionValue::from_json_str(input)?;
    let kind = value.kind();
    value
        .into_map()
        .ok_or_else(|| ChartError::InvalidData(format!("expected a json object, found a {kind}")))
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<usize> for OptionValue {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(Self::Float(OrderedFloat(value as f64)), Self::Int)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Float(OrderedFloat(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<RawExpression> for OptionValue {
    fn from(value: RawExpression) -> Self {
        Self::Raw(value)
    }
}

impl From<OptionMap> for OptionValue {
    fn from(value: OptionMap) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(values: Vec<T>) -> Self {
        Self::Seq(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for OptionValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => match number.as_i64() {
                Some(int) => Self::Int(int),
                None => Self::Float(OrderedFloat(number.as_f64().unwrap_or(f64::NAN))),
            },
            Value::String(text) => Self::Str(text),
            Value::Array(items) => Self::Seq(items.into_iter().map(Self::from).collect()),
            Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Plain serde view of the tree: raw expressions degrade to strings.
///
/// Use `to_json_string` when the output is meant for the charting library.
impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) if value.into_inner().is_finite() => {
                serializer.serialize_f64(value.into_inner())
            }
            Self::Float(_) => serializer.serialize_unit(),
            Self::Str(text) => serializer.serialize_str(text),
            Self::Seq(items) => serializer.collect_seq(items),
            Self::Map(map) => serializer.collect_map(map),
            Self::Raw(expr) => serializer.serialize_str(expr.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OptionValueVisitor)
    }
}

struct OptionValueVisitor;

impl<'de> Visitor<'de> for OptionValueVisitor {
    type Value = OptionValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a json-compatible option value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(OptionValue::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(OptionValue::Int(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(value)
            .map_or(OptionValue::Float(OrderedFloat(value as f64)), OptionValue::Int))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(OptionValue::Float(OrderedFloat(value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(OptionValue::Str(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(OptionValue::Str(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OptionValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OptionValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        OptionValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(OptionValue::Seq(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OptionMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, OptionValue>()? {
            map.insert(key, value);
        }
        Ok(OptionValue::Map(map))
    }
}
