//! Missing-value substitution.

use crate::types::{DataSet, DataType, Value};

use super::NOT_PROVIDED;

/// Which cells count as missing when filling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FillPolicy {
    /// Only true-missing cells ([`Value::Null`]).
    MissingOnly,
    /// True-missing cells and text cells that are empty after trimming, such as a cell that was
    /// all punctuation before character stripping.
    #[default]
    MissingOrBlank,
}

impl FillPolicy {
    fn should_fill(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (Self::MissingOrBlank, Value::Utf8(s)) => s.trim().is_empty(),
            _ => false,
        }
    }
}

/// Number of rows with at least one text cell that is empty after trimming.
///
/// Diagnostic only; nothing downstream depends on it.
pub fn count_blank_rows(dataset: &DataSet) -> usize {
    dataset
        .rows
        .iter()
        .filter(|row| {
            row.iter()
                .any(|v| matches!(v, Value::Utf8(s) if s.trim().is_empty()))
        })
        .count()
}

/// Replace missing cells (per `policy`) with [`NOT_PROVIDED`].
///
/// A column that received at least one fill is declared [`DataType::Utf8`] afterwards.
pub fn fill_missing(dataset: &DataSet, policy: FillPolicy) -> DataSet {
    let mut filled = vec![false; dataset.schema.fields.len()];
    let out = dataset.map_rows(|row| {
        row.iter()
            .enumerate()
            .map(|(idx, v)| {
                if policy.should_fill(v) {
                    if let Some(flag) = filled.get_mut(idx) {
                        *flag = true;
                    }
                    Value::text(NOT_PROVIDED)
                } else {
                    v.clone()
                }
            })
            .collect()
    });

    filled
        .into_iter()
        .enumerate()
        .filter(|(_, was_filled)| *was_filled)
        .fold(out, |ds, (idx, _)| ds.with_column_type(idx, DataType::Utf8))
}
