//! Read-only derived views over store collections.
//!
//! Nothing here mutates a collection: filters and sorts return borrowed rows,
//! statistics return plain counts.

mod fields;
mod filter;
mod lookup;
mod sort;
mod stats;

pub use fields::*;
pub use filter::*;
pub use lookup::*;
pub use sort::*;
pub use stats::*;

use std::fmt::Debug;

/// A typed column of an entity.
pub trait FieldDescriptor<T>: Copy + Eq + Debug + 'static {
    /// Every field, in column order.
    const ALL: &'static [Self];

    /// The field's text value for a record; `None` for an absent optional.
    fn value(self, record: &T) -> Option<&str>;

    /// Whether the table can be ordered by this field.
    fn sortable(self) -> bool;

    /// Column header.
    fn label(self) -> &'static str;
}

/// An entity that can be shown as a searchable, sortable table.
pub trait Tabular: Sized {
    type Field: FieldDescriptor<Self>;

    /// Fields matched by the search box.
    const SEARCH_FIELDS: &'static [Self::Field];

    /// Initial sort column.
    const DEFAULT_SORT: Self::Field;
}

/// Search term plus sort state for one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<T: Tabular> {
    pub search: String,
    pub sort: SortState<T::Field>,
}

impl<T: Tabular> Default for TableView<T> {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortState::new(T::DEFAULT_SORT),
        }
    }
}

impl<T: Tabular> TableView<T> {
    /// A view with the given search term and sort.
    pub fn new(search: impl Into<String>, sort: SortState<T::Field>) -> Self {
        Self {
            search: search.into(),
            sort,
        }
    }

    /// Handle a click on a column header.
    pub fn click_header(&mut self, field: T::Field) {
        self.sort = self.sort.toggle(field);
    }

    /// Filter then sort `records` into display rows.
    pub fn apply<'a>(&self, records: &'a [T]) -> Vec<&'a T> {
        let mut rows = filter_by_text(records, &self.search);
        sort_rows(&mut rows, self.sort.field, self.sort.direction);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Doctor;

    fn doctors() -> Vec<Doctor> {
        vec![
            Doctor::new("CRM-3", "Dr. Carlos Silva", "Cardiologia"),
            Doctor::new("CRM-1", "Dra. Ana Oliveira", "Neurologia"),
            Doctor::new("CRM-2", "Dr. Bruno Costa", "Cardiologia"),
        ]
    }

    #[test]
    fn test_default_view_sorts_by_default_field() {
        let doctors = doctors();
        let view = TableView::<Doctor>::default();
        let names: Vec<&str> = view.apply(&doctors).iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Dr. Bruno Costa", "Dr. Carlos Silva", "Dra. Ana Oliveira"]);
    }

    #[test]
    fn test_filter_then_sort() {
        let doctors = doctors();
        let mut view = TableView::<Doctor>::new("cardio", SortState::new(DoctorField::Crm));
        let crms: Vec<&str> = view.apply(&doctors).iter().map(|d| d.crm.as_str()).collect();
        assert_eq!(crms, vec!["CRM-2", "CRM-3"]);

        view.click_header(DoctorField::Crm);
        let crms: Vec<&str> = view.apply(&doctors).iter().map(|d| d.crm.as_str()).collect();
        assert_eq!(crms, vec!["CRM-3", "CRM-2"]);
    }
}
