mod realm;
pub use realm::{Realm, NAME_REALM_SEPARATOR, REALM_COMPONENT_SEPARATOR};

mod trust_path;
pub use trust_path::TrustPath;

mod capaths;
pub use capaths::{CapathLookup, EmptyCapaths, MapCapaths};

mod hierarchy;
pub use hierarchy::hierarchy_path;

mod resolve;
pub use resolve::{realms_path, resolve};

mod forge;
pub use forge::{new_krbtgt_principal, path_tgt_principals, KRBTGT};
