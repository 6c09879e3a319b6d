//! Fixture-backed menu provider.
//!
//! Menus are declared in a JSON fixture keyed by menu id, each value an
//! ordered tree of link records. Selection parameters are applied here,
//! mirroring what a real backend's tree loader would do: re-rooting at a
//! parent link, pruning disabled subtrees, promoting a minimum depth,
//! truncating at a maximum depth. Input order is preserved throughout.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use menucast_core::{MenuLinkRecord, MenuProvider, TreeParams};

/// Fixture shape: menu id to ordered root records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuFixture {
    /// All declared menus.
    #[serde(default)]
    pub menus: BTreeMap<String, Vec<MenuLinkRecord>>,
}

/// Menu provider over an in-memory fixture snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticMenuProvider {
    fixture: MenuFixture,
}

impl StaticMenuProvider {
    /// Wrap a fixture.
    pub fn new(fixture: MenuFixture) -> Self {
        Self { fixture }
    }

    /// Parse a fixture from raw JSON.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }
}

impl MenuProvider for StaticMenuProvider {
    fn load_tree(&self, menu_id: &str, params: &TreeParams) -> Option<Vec<MenuLinkRecord>> {
        let mut tree = self.fixture.menus.get(menu_id)?.clone();

        if let Some(root_id) = params.root_id.as_deref() {
            // The root link itself is excluded; an unknown root yields an
            // empty (but known) menu.
            tree = find_subtree(&tree, root_id)
                .map(|root| root.children.clone())
                .unwrap_or_default();
        }
        if params.only_enabled {
            tree = prune_disabled(tree);
        }
        if let Some(min_depth) = params.min_depth {
            tree = promote_to_depth(tree, min_depth);
        }
        match params.max_depth {
            Some(0) => tree.clear(),
            Some(max_depth) => truncate_below(&mut tree, max_depth),
            None => {}
        }
        Some(tree)
    }
}

fn find_subtree<'a>(tree: &'a [MenuLinkRecord], id: &str) -> Option<&'a MenuLinkRecord> {
    for record in tree {
        if record.id == id {
            return Some(record);
        }
        if let Some(found) = find_subtree(&record.children, id) {
            return Some(found);
        }
    }
    None
}

fn prune_disabled(tree: Vec<MenuLinkRecord>) -> Vec<MenuLinkRecord> {
    tree.into_iter()
        .filter(|record| record.enabled)
        .map(|mut record| {
            record.children = prune_disabled(std::mem::take(&mut record.children));
            record
        })
        .collect()
}

/// Depth 1 is the top level. Subtrees rooted at `min_depth` become the new
/// roots, in depth-first order.
fn promote_to_depth(tree: Vec<MenuLinkRecord>, min_depth: u32) -> Vec<MenuLinkRecord> {
    if min_depth <= 1 {
        return tree;
    }
    tree.into_iter()
        .flat_map(|record| promote_to_depth(record.children, min_depth - 1))
        .collect()
}

fn truncate_below(tree: &mut [MenuLinkRecord], max_depth: u32) {
    for record in tree {
        if max_depth <= 1 {
            record.children.clear();
        } else {
            truncate_below(&mut record.children, max_depth - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, children: Vec<MenuLinkRecord>) -> MenuLinkRecord {
        MenuLinkRecord {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            target: format!("/{id}"),
            enabled: true,
            expanded: false,
            parent: None,
            weight: 0,
            access: None,
            children,
        }
    }

    fn provider() -> StaticMenuProvider {
        let mut disabled = record("drafts", vec![record("draft-child", vec![])]);
        disabled.enabled = false;
        let fixture = MenuFixture {
            menus: BTreeMap::from([
                (
                    "main".to_string(),
                    vec![
                        record(
                            "about",
                            vec![
                                record("team", vec![record("bio", vec![])]),
                                record("history", vec![]),
                            ],
                        ),
                        disabled,
                        record("contact", vec![]),
                    ],
                ),
                ("empty".to_string(), vec![]),
            ]),
        };
        StaticMenuProvider::new(fixture)
    }

    fn ids(tree: &[MenuLinkRecord]) -> Vec<&str> {
        tree.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn unknown_menu_is_none_empty_menu_is_some() {
        let p = provider();
        assert!(p.load_tree("missing", &TreeParams::default()).is_none());
        assert_eq!(p.load_tree("empty", &TreeParams::default()), Some(vec![]));
    }

    #[test]
    fn only_enabled_prunes_subtrees() {
        let p = provider();
        let tree = p
            .load_tree(
                "main",
                &TreeParams {
                    only_enabled: true,
                    ..TreeParams::default()
                },
            )
            .unwrap();
        assert_eq!(ids(&tree), ["about", "contact"]);
    }

    #[test]
    fn root_id_excludes_the_root_itself() {
        let p = provider();
        let tree = p
            .load_tree(
                "main",
                &TreeParams {
                    root_id: Some("about".to_string()),
                    ..TreeParams::default()
                },
            )
            .unwrap();
        assert_eq!(ids(&tree), ["team", "history"]);
    }

    #[test]
    fn unknown_root_id_yields_empty_tree() {
        let p = provider();
        let tree = p
            .load_tree(
                "main",
                &TreeParams {
                    root_id: Some("missing".to_string()),
                    ..TreeParams::default()
                },
            )
            .unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn min_depth_promotes_subtrees() {
        let p = provider();
        let tree = p
            .load_tree(
                "main",
                &TreeParams {
                    min_depth: Some(2),
                    ..TreeParams::default()
                },
            )
            .unwrap();
        assert_eq!(ids(&tree), ["team", "history", "draft-child"]);
    }

    #[test]
    fn max_depth_truncates_children() {
        let p = provider();
        let tree = p
            .load_tree(
                "main",
                &TreeParams {
                    max_depth: Some(1),
                    ..TreeParams::default()
                },
            )
            .unwrap();
        assert_eq!(ids(&tree), ["about", "drafts", "contact"]);
        assert!(tree.iter().all(|r| r.children.is_empty()));
    }

    #[test]
    fn max_depth_zero_is_empty() {
        let p = provider();
        let tree = p
            .load_tree(
                "main",
                &TreeParams {
                    max_depth: Some(0),
                    ..TreeParams::default()
                },
            )
            .unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn fixture_parses_from_json() {
        let raw = r#"{
            "menus": {
                "footer": [
                    {"id": "legal", "title": "Legal", "target": "/legal"}
                ]
            }
        }"#;
        let p = StaticMenuProvider::from_json(raw).unwrap();
        let tree = p.load_tree("footer", &TreeParams::default()).unwrap();
        assert_eq!(ids(&tree), ["legal"]);
    }
}
