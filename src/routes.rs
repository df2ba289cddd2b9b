//! The route table: static path strings mapped to view targets, with a
//! single fallback for everything else.

/// Everything the router can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    RandomSequence,
    Memo,
    NotFound,
}

impl Route {
    /// Link label used in the navigation header.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::RandomSequence => "Random sequence",
            Route::Memo => "Memo",
            Route::NotFound => "Page not found",
        }
    }
}

/// One concrete entry: an exact path and its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub route: Route,
}

/// Static mapping from exact paths to routes. Built once at startup and
/// never mutated; unmatched paths fall through to `NotFound`.
pub struct RouteTable {
    entries: &'static [RouteEntry],
    fallback: Route,
}

/// Pattern handed to the router's catch-all `<Route>`.
pub const CATCH_ALL_PATTERN: &str = "/*any";

const ENTRIES: &[RouteEntry] = &[
    RouteEntry { path: "/", route: Route::Home },
    RouteEntry { path: "/rasq/", route: Route::RandomSequence },
    RouteEntry { path: "/memo/", route: Route::Memo },
];

impl RouteTable {
    pub fn new() -> Self {
        Self { entries: ENTRIES, fallback: Route::NotFound }
    }

    /// Exact string match against the table; anything else gets the
    /// fallback. No partial matching, no parameters.
    pub fn resolve(&self, path: &str) -> Route {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.route)
            .unwrap_or(self.fallback)
    }

    /// The concrete entries, in declaration order. Drives both the
    /// `<Routes>` wiring and the nav links.
    pub fn entries(&self) -> &'static [RouteEntry] {
        self.entries
    }

    pub fn fallback(&self) -> Route {
        self.fallback
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_exact_key_resolves_to_its_target() {
        let table = RouteTable::new();
        for entry in table.entries() {
            assert_eq!(table.resolve(entry.path), entry.route, "path {}", entry.path);
        }
    }

    #[test]
    fn known_paths() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("/"), Route::Home);
        assert_eq!(table.resolve("/rasq/"), Route::RandomSequence);
        assert_eq!(table.resolve("/memo/"), Route::Memo);
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("/does-not-exist"), Route::NotFound);
        assert_eq!(table.resolve(""), Route::NotFound);
        assert_eq!(table.resolve("/rasq"), Route::NotFound); // no fuzzy match
        assert_eq!(table.resolve("/memo/1/"), Route::NotFound);
    }

    #[test]
    fn concrete_paths_are_unique() {
        let table = RouteTable::new();
        let entries = table.entries();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn fallback_is_not_a_concrete_entry() {
        let table = RouteTable::new();
        assert!(table.entries().iter().all(|e| e.route != table.fallback()));
    }
}
