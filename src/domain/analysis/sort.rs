//! Stable table sorting with a two-state direction toggle.

use serde::{Deserialize, Serialize};

/// Sort direction for ranked tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Current sort column and direction for a sortable table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState<K> {
    pub key: K,
    pub order: SortOrder,
}

impl<K: PartialEq + Copy> SortState<K> {
    /// Creates a sort state with the default descending direction.
    pub fn new(key: K) -> Self {
        Self {
            key,
            order: SortOrder::Descending,
        }
    }

    /// Header-click reducer: re-clicking the current column flips the
    /// direction; clicking a new column sorts it descending.
    pub fn click(&mut self, key: K) {
        if self.key == key {
            self.order = self.order.toggled();
        } else {
            self.key = key;
            self.order = SortOrder::Descending;
        }
    }
}

/// Sorts rows by a numeric key. The sort is stable: ties keep their
/// input order.
pub fn sort_rows<T: Clone>(rows: &[T], key: impl Fn(&T) -> f64, order: SortOrder) -> Vec<T> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = key(a).total_cmp(&key(b));
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Column {
        Frequency,
        Rank,
    }

    #[test]
    fn sorts_descending() {
        let rows = vec![41.0, 87.0, 52.0, 64.0];
        let sorted = sort_rows(&rows, |v| *v, SortOrder::Descending);
        assert_eq!(sorted, vec![87.0, 64.0, 52.0, 41.0]);
    }

    #[test]
    fn sorts_ascending() {
        let rows = vec![2.1, 1.8, 2.9, 2.4];
        let sorted = sort_rows(&rows, |v| *v, SortOrder::Ascending);
        assert_eq!(sorted, vec![1.8, 2.1, 2.4, 2.9]);
    }

    #[test]
    fn ties_keep_input_order() {
        let rows = vec![("a", 5.0), ("b", 5.0), ("c", 7.0), ("d", 5.0)];
        let sorted = sort_rows(&rows, |(_, v)| *v, SortOrder::Descending);
        let names: Vec<&str> = sorted.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn sorting_a_sorted_table_is_idempotent() {
        let rows = vec![3.0, 1.0, 2.0];
        let once = sort_rows(&rows, |v| *v, SortOrder::Descending);
        let twice = sort_rows(&once, |v| *v, SortOrder::Descending);
        assert_eq!(once, twice);
    }

    #[test]
    fn opposite_sorts_restore_original_order_for_distinct_keys() {
        let rows = vec![4.0, 1.0, 3.0, 2.0];
        let down = sort_rows(&rows, |v| *v, SortOrder::Descending);
        let up = sort_rows(&down, |v| *v, SortOrder::Ascending);
        assert_eq!(up, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn click_same_column_flips_direction() {
        let mut state = SortState::new(Column::Frequency);
        assert_eq!(state.order, SortOrder::Descending);
        state.click(Column::Frequency);
        assert_eq!(state.order, SortOrder::Ascending);
        state.click(Column::Frequency);
        assert_eq!(state.order, SortOrder::Descending);
    }

    #[test]
    fn click_new_column_resets_to_descending() {
        let mut state = SortState::new(Column::Frequency);
        state.click(Column::Frequency);
        assert_eq!(state.order, SortOrder::Ascending);
        state.click(Column::Rank);
        assert_eq!(state.key, Column::Rank);
        assert_eq!(state.order, SortOrder::Descending);
    }

    proptest! {
        #[test]
        fn sort_preserves_length_and_elements(
            rows in proptest::collection::vec(0u32..1000, 0..40),
        ) {
            let rows: Vec<f64> = rows.into_iter().map(f64::from).collect();
            let sorted = sort_rows(&rows, |v| *v, SortOrder::Descending);
            prop_assert_eq!(sorted.len(), rows.len());
            let mut expected = rows.clone();
            expected.sort_by(|a, b| b.total_cmp(a));
            prop_assert_eq!(sorted, expected);
        }
    }
}
