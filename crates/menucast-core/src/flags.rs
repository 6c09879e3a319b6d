//! Active-flag application.
//!
//! A pure tree walk marking each item from a computed trail: the trail's
//! last id is the active item, every trail member is in the active trail.
//! An empty trail clears both flags everywhere.

use std::collections::HashSet;

use crate::model::MenuItem;

/// Apply `active` / `in_active_trail` flags in place over all descendants.
pub fn apply_flags(items: &mut [MenuItem], trail: &[String]) {
    let trail_set: HashSet<&str> = trail.iter().map(String::as_str).collect();
    let active_id = trail.last().map(String::as_str);
    mark(items, &trail_set, active_id);
}

fn mark(items: &mut [MenuItem], trail_set: &HashSet<&str>, active_id: Option<&str>) {
    for item in items {
        // An item without an id is skipped for flagging, never fatal.
        if item.id.is_empty() {
            item.active = false;
            item.in_active_trail = false;
        } else {
            item.active = active_id == Some(item.id.as_str());
            item.in_active_trail = trail_set.contains(item.id.as_str());
        }
        mark(&mut item.children, trail_set, active_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, children: Vec<MenuItem>) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            url: format!("/{id}"),
            external: false,
            expanded: false,
            parent: None,
            weight: 0,
            active: false,
            in_active_trail: false,
            resolve: None,
            children,
        }
    }

    fn count_active(items: &[MenuItem]) -> usize {
        items
            .iter()
            .map(|i| usize::from(i.active) + count_active(&i.children))
            .sum()
    }

    #[test]
    fn last_trail_id_is_active_ancestors_in_trail() {
        let mut tree = vec![
            item("about", vec![item("team", vec![item("bio", vec![])])]),
            item("contact", vec![]),
        ];
        let trail = vec!["about".to_string(), "team".to_string()];
        apply_flags(&mut tree, &trail);

        assert!(!tree[0].active);
        assert!(tree[0].in_active_trail);
        let team = &tree[0].children[0];
        assert!(team.active);
        assert!(team.in_active_trail);
        assert!(!team.children[0].active);
        assert!(!team.children[0].in_active_trail);
        assert!(!tree[1].active);
        assert!(!tree[1].in_active_trail);
        assert_eq!(count_active(&tree), 1);
    }

    #[test]
    fn empty_trail_clears_all_flags() {
        let mut tree = vec![item("a", vec![item("b", vec![])])];
        tree[0].active = true;
        tree[0].in_active_trail = true;
        tree[0].children[0].in_active_trail = true;

        apply_flags(&mut tree, &[]);
        assert_eq!(count_active(&tree), 0);
        assert!(!tree[0].in_active_trail);
        assert!(!tree[0].children[0].in_active_trail);
    }

    #[test]
    fn reapplying_a_new_trail_unsets_old_flags() {
        let mut tree = vec![item("a", vec![]), item("b", vec![])];
        apply_flags(&mut tree, &["a".to_string()]);
        assert!(tree[0].active);

        apply_flags(&mut tree, &["b".to_string()]);
        assert!(!tree[0].active && !tree[0].in_active_trail);
        assert!(tree[1].active && tree[1].in_active_trail);
    }
}
