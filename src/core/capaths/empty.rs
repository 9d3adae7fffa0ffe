use super::CapathLookup;

/// Capaths view with no declarations at all, the situation of a
/// configuration without a `[capaths]` stanza. Every resolution
/// falls through to the hierarchical fallback.
#[derive(Clone, Debug, Default)]
pub struct EmptyCapaths {}

impl EmptyCapaths {
    pub fn new() -> Self {
        return Self {};
    }
}

impl CapathLookup for EmptyCapaths {
    fn lookup(&self, _target: &str, _client: &str) -> Option<String> {
        return None;
    }
}
