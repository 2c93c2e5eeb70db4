//! All-sentinel reducer for multi-select filters.

/// Applies the all-sentinel rule to a multi-select list.
///
/// Choosing the sentinel replaces the whole selection with just the
/// sentinel; choosing a concrete value removes the sentinel and toggles
/// that value's membership. The rule lives here and nowhere else.
pub fn toggle_all_sentinel<T>(current: &[T], selected: T, sentinel: &T) -> Vec<T>
where
    T: PartialEq + Clone,
{
    if selected == *sentinel {
        return vec![selected];
    }

    let mut next: Vec<T> = current
        .iter()
        .filter(|value| *value != sentinel)
        .cloned()
        .collect();

    match next.iter().position(|value| *value == selected) {
        Some(index) => {
            next.remove(index);
        }
        None => next.push(selected),
    }
    next
}
