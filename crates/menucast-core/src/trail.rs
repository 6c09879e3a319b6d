//! Active-trail computation.
//!
//! Given the built item tree and a normalized target path, find the item
//! whose path best matches the target and reconstruct the root-to-item id
//! chain. Matching is path-only: query strings and external links never
//! participate. The winner is the candidate with the longest matched path;
//! ties go to the first item seen in depth-first flatten order, which is
//! deterministic.

use std::collections::{HashMap, HashSet};

use crate::model::MenuItem;
use crate::path;

struct FlatLink<'a> {
    id: &'a str,
    parent: Option<&'a str>,
    /// Path-only normalization of the item URL; empty for external items
    /// and unusable paths, which can never match.
    match_path: String,
}

/// Compute the active trail for `target_path` over `items`.
///
/// Returns the ordered root-to-leaf id chain of the best-matching item, or
/// an empty vector when nothing matches. `target_path` is expected in
/// path-only normalized form; an empty target matches nothing.
pub fn compute_trail(items: &[MenuItem], target_path: &str) -> Vec<String> {
    if target_path.is_empty() {
        return Vec::new();
    }

    let mut flat = Vec::new();
    flatten(items, &mut flat);

    let mut winner: Option<(usize, usize)> = None;
    for (index, link) in flat.iter().enumerate() {
        if link.match_path.is_empty() || !is_match(&link.match_path, target_path) {
            continue;
        }
        let length = link.match_path.len();
        match winner {
            Some((_, best)) if best >= length => {}
            _ => winner = Some((index, length)),
        }
    }
    let Some((winner_index, _)) = winner else {
        return Vec::new();
    };

    let by_id: HashMap<&str, &FlatLink<'_>> =
        flat.iter().map(|link| (link.id, link)).collect();

    // Walk parents upward; the seen-set guards against a cycling parent
    // chain even though provider trees should never contain one.
    let mut trail = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut current = Some(flat[winner_index].id);
    while let Some(id) = current {
        if !seen.insert(id) {
            break;
        }
        trail.push(id.to_string());
        current = by_id
            .get(id)
            .and_then(|link| link.parent)
            .filter(|parent| !parent.is_empty());
    }
    trail.reverse();
    trail
}

fn flatten<'a>(items: &'a [MenuItem], out: &mut Vec<FlatLink<'a>>) {
    for item in items {
        if !item.id.is_empty() {
            let match_path = if item.external {
                String::new()
            } else {
                path::normalize_match_path(&item.url)
            };
            out.push(FlatLink {
                id: &item.id,
                parent: item.parent.as_deref(),
                match_path,
            });
        }
        flatten(&item.children, out);
    }
}

/// A path matches the target when equal, or when the target continues past
/// it at a segment boundary. Root only matches root.
fn is_match(path: &str, target: &str) -> bool {
    if path == target {
        return true;
    }
    if path == "/" {
        return false;
    }
    target.len() > path.len()
        && target.starts_with(path)
        && target.as_bytes()[path.len()] == b'/'
}
