mod lookup_trait;
pub use lookup_trait::CapathLookup;

mod map;
pub use map::MapCapaths;

mod empty;
pub use empty::EmptyCapaths;

mod search;
pub use search::search_capaths;
