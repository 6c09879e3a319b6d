use serde::{Deserialize, Serialize};

use menucast_core::MenuItem;

/// Response envelope for a menu request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuResponse {
    pub data: Vec<MenuItem>,
    pub meta: MenuMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuMeta {
    pub menu: String,
    pub active_trail: Vec<String>,
    pub langcode: Option<String>,
    /// The targeted path in normalized path-only form; null when absent
    /// or unusable.
    pub path: Option<String>,
    pub resolve: bool,
}
