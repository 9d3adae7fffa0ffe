/// Read-only view over the administrator declared realm trust
/// configuration, the equivalent of a parsed `[capaths]` stanza.
/// Implementations are expected to be immutable snapshots, safe for
/// concurrent reads.
pub trait CapathLookup {
    /// Returns the raw value declared for reaching `target` from
    /// `client`: a whitespace-separated list of intermediary realms
    /// (most preferred first), the literal `.` when the chain ends
    /// with no further hop, or the client realm name itself for a
    /// direct connection. `None` when nothing is declared for the
    /// pair; an unavailable provider must answer the same way.
    fn lookup(&self, target: &str, client: &str) -> Option<String>;
}
