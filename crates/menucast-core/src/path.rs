//! Path normalization for menu link URLs.
//!
//! Menu targets arrive in several ambiguous representations: absolute URLs,
//! relative paths, path+query strings, paths with repeated or trailing
//! slashes. This module reduces all of them to one canonical form so that
//! link display and active-trail matching cannot drift apart.
//!
//! Two variants share one implementation:
//! - the link variant keeps the query string (what the frontend renders)
//! - the match variant keeps only the path (what the trail compares)
//!
//! Goals:
//! - idempotent: `normalize(normalize(x)) == normalize(x)`
//! - purely string-based, no percent-decoding, no filesystem or network
//! - unusable input yields an empty string, never an error
//!
//! Non-goals:
//! - canonicalizing cross-origin URLs beyond stripping scheme and host

/// Inputs longer than this normalize to empty. Menus are authored content;
/// anything past this bound is pathological, not a real link.
const MAX_INPUT_LEN: usize = 2048;

/// Normalize a path or URL string into a canonical path form.
///
/// Rules:
/// - empty or whitespace-only input yields `""` (no path)
/// - input longer than 2048 characters yields `""`
/// - a `scheme://host` prefix is discarded; only the path survives
/// - the fragment (`#...`) is always discarded
/// - the result starts with `/`
/// - runs of `/` collapse to a single `/`
/// - a trailing `/` is stripped unless the whole path is `/`
/// - with `keep_query`, a non-empty query string is appended verbatim
///   after a literal `?`
pub fn normalize(input: &str, keep_query: bool) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_INPUT_LEN {
        return String::new();
    }

    let rest = strip_scheme_and_host(trimmed);

    // Fragment never survives either variant.
    let rest = rest.split('#').next().unwrap_or("");

    let (path_part, query) = match rest.split_once('?') {
        Some((p, q)) => (p, q),
        None => (rest, ""),
    };

    let mut out = String::with_capacity(path_part.len() + query.len() + 2);
    out.push('/');
    let mut prev_slash = true;
    for c in path_part.chars() {
        if c == '/' {
            if !prev_slash {
                out.push('/');
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }

    if keep_query && !query.is_empty() {
        out.push('?');
        out.push_str(query);
    }
    out
}

/// Normalize for link display: path plus query, fragment dropped.
pub fn normalize_link_url(input: &str) -> String {
    normalize(input, true)
}

/// Normalize for active-trail comparison: path only.
pub fn normalize_match_path(input: &str) -> String {
    normalize(input, false)
}

/// Drop a leading `scheme://host` pair, keeping everything from the first
/// `/`, `?`, or `#` after the host. A `://` that is not preceded by a valid
/// scheme (for example inside a query value) is left alone.
fn strip_scheme_and_host(input: &str) -> &str {
    let Some(pos) = input.find("://") else {
        return input;
    };
    let scheme = &input[..pos];
    if scheme.is_empty() || !scheme.chars().all(is_scheme_char) {
        return input;
    }
    let after_host = &input[pos + 3..];
    match after_host.find(['/', '?', '#']) {
        Some(i) => &after_host[i..],
        None => "",
    }
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.'
}
