use crate::core::VisibleItem;

/// Sum of `value` over an already-filtered collection. The total must be
/// computed after access filtering so it covers exactly the rendered rows.
pub fn total_value(items: &[VisibleItem]) -> f64 {
    items.iter().map(|item| item.value).sum()
}

pub fn count_priority(items: &[VisibleItem]) -> usize {
    items.iter().filter(|item| item.priority).count()
}
