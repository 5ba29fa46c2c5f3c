//! Static route table consulted by the navigation guard.
//!
//! DESIGN
//! ======
//! The Leptos `<Router>` in `app.rs` owns rendering; this table is the
//! single source of truth for guard metadata. Entries may nest, and a
//! `requires_auth` flag anywhere in the matched chain gates the target.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// A single route definition. Defined once at startup, immutable.
#[derive(Clone, Copy, Debug)]
pub struct RouteEntry {
    /// Path segment, absolute for top-level entries, relative for children.
    pub path: &'static str,
    pub name: Option<&'static str>,
    /// When true the navigation guard requires a live session.
    pub requires_auth: bool,
    pub children: &'static [RouteEntry],
}

/// The application's route table.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        name: None,
        requires_auth: false,
        children: &[],
    },
    RouteEntry {
        path: "/login",
        name: Some("login"),
        requires_auth: false,
        children: &[],
    },
    RouteEntry {
        path: "/app",
        name: Some("app"),
        requires_auth: true,
        children: &[],
    },
];

/// Resolve `path` against `table`, returning the matched chain from the
/// outermost ancestor down to the leaf. Any query string is ignored.
/// Unknown paths return an empty chain.
pub fn match_route<'a>(table: &'a [RouteEntry], path: &str) -> Vec<&'a RouteEntry> {
    let path = path.split_once('?').map_or(path, |(p, _)| p);
    let mut chain = Vec::new();
    if walk(table, "", path, &mut chain) {
        chain
    } else {
        Vec::new()
    }
}

/// True when the matched chain for `path` contains an entry (the target or
/// any ancestor) with `requires_auth` set.
pub fn requires_auth(table: &[RouteEntry], path: &str) -> bool {
    match_route(table, path)
        .iter()
        .any(|entry| entry.requires_auth)
}

fn walk<'a>(
    entries: &'a [RouteEntry],
    prefix: &str,
    target: &str,
    chain: &mut Vec<&'a RouteEntry>,
) -> bool {
    for entry in entries {
        let full = join(prefix, entry.path);
        chain.push(entry);
        if full == target || walk(entry.children, &full, target, chain) {
            return true;
        }
        chain.pop();
    }
    false
}

fn join(prefix: &str, path: &str) -> String {
    if prefix.is_empty() {
        path.to_owned()
    } else {
        format!(
            "{}/{}",
            prefix.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
