//! Stable column sorting and header-click sort state.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::FieldDescriptor;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Current sort column and direction of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + Eq> SortState<F> {
    /// Ascending on `field`.
    pub fn new(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn with_direction(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Next state after a header click: the same field flips direction,
    /// a different field starts ascending.
    pub fn toggle(self, field: F) -> Self {
        if field == self.field {
            Self {
                field,
                direction: self.direction.reversed(),
            }
        } else {
            Self::new(field)
        }
    }
}

/// Stable sort of `rows` by `field`.
///
/// Ties keep their input order in both directions. Absent values sort as the
/// empty string. Non-sortable fields leave the rows untouched.
pub fn sort_rows<T, F: FieldDescriptor<T>>(rows: &mut [&T], field: F, direction: SortDirection) {
    if !field.sortable() {
        return;
    }
    rows.sort_by(|a, b| {
        let left = field.value(a).unwrap_or_default();
        let right = field.value(b).unwrap_or_default();
        direction.apply(left.cmp(right))
    });
}

/// Sorted borrowed view of `records`.
pub fn sorted<'a, T, F: FieldDescriptor<T>>(records: &'a [T], field: F, direction: SortDirection) -> Vec<&'a T> {
    let mut rows: Vec<&T> = records.iter().collect();
    sort_rows(&mut rows, field, direction);
    rows
}
