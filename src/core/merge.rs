use smallvec::SmallVec;
use tracing::trace;

use crate::error::{ChartError, ChartResult};

use super::{OptionMap, OptionValue};

type KeyPath<'a> = SmallVec<[&'a str; 8]>;

/// Deep-merges `fragment` into `base`.
///
/// Mapping values merge recursively. Every other fragment value replaces the
/// base value wholesale, sequences included. Keys only present in `base` are
/// left untouched.
pub fn merge(base: &mut OptionMap, fragment: OptionMap) {
    for (key, incoming) in fragment {
        match incoming {
            OptionValue::Map(nested) => match base.get_mut(&key) {
                Some(OptionValue::Map(existing)) => merge(existing, nested),
                _ => {
                    base.insert(key, OptionValue::Map(nested));
                }
            },
            other => {
                base.insert(key, other);
            }
        }
    }
}

/// Strict variant of [`merge`].
///
/// Fails with `InvalidFragmentShape` when a key holds a mapping on one side
/// and a non-null non-mapping on the other. Validation runs before any
/// mutation, so `base` is unchanged on error.
pub fn try_merge(base: &mut OptionMap, fragment: OptionMap) -> ChartResult<()> {
    check_shapes(base, &fragment, &mut KeyPath::new())?;
    merge(base, fragment);
    Ok(())
}

fn check_shapes<'a>(
    base: &OptionMap,
    fragment: &'a OptionMap,
    path: &mut KeyPath<'a>,
) -> ChartResult<()> {
    for (key, incoming) in fragment {
        let Some(existing) = base.get(key) else {
            continue;
        };

        path.push(key);
        match (existing, incoming) {
            (OptionValue::Map(existing), OptionValue::Map(nested)) => {
                check_shapes(existing, nested, path)?;
            }
            (existing, incoming)
                if !existing.is_null() && existing.is_map() != incoming.is_map() =>
            {
                return Err(ChartError::InvalidFragmentShape {
                    path: path.join("."),
                    existing: existing.kind(),
                    incoming: incoming.kind(),
                });
            }
            _ => {}
        }
        path.pop();
    }
    Ok(())
}

/// Writes `value` at `path`, creating intermediate mappings.
///
/// An intermediate non-mapping value is replaced by a fresh mapping. An empty
/// path is a no-op.
pub fn set_path(map: &mut OptionMap, path: &[&str], value: impl Into<OptionValue>) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };

    let mut node = map;
    for segment in parents {
        let slot = node.entry((*segment).to_owned()).or_default();
        if !slot.is_map() {
            if !slot.is_null() {
                trace!(segment = *segment, replaced = slot.kind(), "replacing leaf with mapping");
            }
            *slot = OptionValue::Map(OptionMap::new());
        }
        node = match slot {
            OptionValue::Map(next) => next,
            _ => return,
        };
    }
    node.insert((*last).to_owned(), value.into());
}
