//! Cross-realm trust path resolution for Kerberos clients and KDCs.
//!
//! Given a client realm and a server realm, this crate computes the
//! ordered list of realms whose ticket granting services must be
//! chained to authenticate across realm boundaries. Administrator
//! declared capaths are honored first; without them the trust chain
//! is inferred from the DNS-like hierarchy of the realm names.
//!
//! ```
//! use crossrealm::{resolve, EmptyCapaths};
//!
//! let path = resolve(
//!     "SALES.EXAMPLE.COM",
//!     "ENG.EXAMPLE.COM",
//!     &EmptyCapaths::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     "SALES.EXAMPLE.COM -> EXAMPLE.COM",
//!     format!("{}", path)
//! );
//! ```

mod core;
mod error;

pub use crate::core::{
    hierarchy_path, new_krbtgt_principal, path_tgt_principals, realms_path,
    resolve, CapathLookup, EmptyCapaths, MapCapaths, Realm, TrustPath,
    KRBTGT, NAME_REALM_SEPARATOR, REALM_COMPONENT_SEPARATOR,
};
pub use crate::error::{PathError, RealmError, Result};
