use super::CapathLookup;
use std::collections::HashMap;

/// In-memory capaths snapshot, keyed by target realm and then by
/// client realm. This is the shape a configuration parser hands
/// over once the `[capaths]` stanza is read.
#[derive(Clone, Debug, Default)]
pub struct MapCapaths {
    entries: HashMap<String, HashMap<String, String>>,
}

impl MapCapaths {
    pub fn new() -> Self {
        return Self {
            entries: HashMap::new(),
        };
    }

    /// Declares the intermediaries value for reaching `target` from
    /// `client`, replacing any previous declaration for the pair.
    pub fn insert(&mut self, target: &str, client: &str, value: &str) {
        self.entries
            .entry(target.to_string())
            .or_insert_with(HashMap::new)
            .insert(client.to_string(), value.to_string());
    }
}

impl CapathLookup for MapCapaths {
    fn lookup(&self, target: &str, client: &str) -> Option<String> {
        return self
            .entries
            .get(target)
            .and_then(|clients| clients.get(client))
            .cloned();
    }
}
