use crate::core::{Item, Role, User, VisibleItem};
use log::debug;

/// Thresholds governing row visibility and priority marking. The defaults
/// match the reference behavior; `.relato.toml` may override them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityPolicy {
    /// Admin rows strictly above this value are marked priority.
    pub priority_threshold: f64,
    /// Standard users see rows at or below this value.
    pub standard_value_limit: f64,
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self {
            priority_threshold: 1000.0,
            standard_value_limit: 500.0,
        }
    }
}

/// Apply role-based visibility to the candidate items.
///
/// Admins see every item, each annotated with a priority flag. Standard
/// users see only items within the value limit, never annotated. The input
/// is never mutated; retained items are copy-constructed.
pub fn visible_items(user: &User, items: &[Item], policy: &VisibilityPolicy) -> Vec<VisibleItem> {
    let visible = match user.role {
        Role::Admin => mark_priority_items(items, policy),
        Role::Standard => items
            .iter()
            .filter(|item| item.value <= policy.standard_value_limit)
            .map(VisibleItem::plain)
            .collect(),
    };

    debug!(
        "visibility filter: {} of {} items retained for {:?} user {}",
        visible.len(),
        items.len(),
        user.role,
        user.name
    );
    visible
}

fn mark_priority_items(items: &[Item], policy: &VisibilityPolicy) -> Vec<VisibleItem> {
    items
        .iter()
        .map(|item| VisibleItem::marked(item, item.value > policy.priority_threshold))
        .collect()
}
