use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MenuQuery {
    /// Language code passed through to the resolver.
    #[serde(default)]
    pub langcode: Option<String>,
    /// Request path used for active-trail targeting.
    #[serde(default)]
    pub path: Option<String>,
    /// Resolution toggle; "0" and "false" disable, anything else enables.
    #[serde(default)]
    pub resolve: Option<String>,
    #[serde(default)]
    pub min_depth: Option<u32>,
    #[serde(default)]
    pub max_depth: Option<u32>,
    /// Link id to root the subtree at, excluding that root itself.
    #[serde(default)]
    pub parent: Option<String>,
}

impl MenuQuery {
    pub fn resolve_enabled(&self) -> bool {
        !matches!(self.resolve.as_deref(), Some("0") | Some("false"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults_to_enabled() {
        assert!(MenuQuery::default().resolve_enabled());
        let q = MenuQuery { resolve: Some("1".to_string()), ..MenuQuery::default() };
        assert!(q.resolve_enabled());
    }

    #[test]
    fn resolve_disabled_by_zero_and_false() {
        for v in ["0", "false"] {
            let q = MenuQuery { resolve: Some(v.to_string()), ..MenuQuery::default() };
            assert!(!q.resolve_enabled());
        }
    }
}
