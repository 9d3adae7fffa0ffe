use crate::core::capaths::{search_capaths, CapathLookup};
use crate::core::hierarchy::hierarchy_path;
use crate::core::realm::Realm;
use crate::core::trust_path::TrustPath;
use crate::error::Result;
use log::debug;
use std::convert::TryFrom;

/// Computes the realms that must be traversed to obtain a service
/// ticket for `server_realm` starting from `client_realm`. Declared
/// capaths take precedence; without them the naming hierarchy of the
/// realms decides. The returned path always starts with the client
/// realm and resolution never fails for lack of declarations.
pub fn realms_path(
    client_realm: &Realm,
    server_realm: &Realm,
    capaths: &dyn CapathLookup,
) -> TrustPath {
    if client_realm == server_realm {
        debug!("realms path: same realm {}", client_realm);
        return TrustPath::new(client_realm.clone());
    }

    if let Some(path) = search_capaths(client_realm, server_realm, capaths)
    {
        return path;
    }

    debug!(
        "realms path: no usable capath from {} to {}, using hierarchy",
        client_realm, server_realm
    );
    return hierarchy_path(client_realm, server_realm);
}

/// Convenience front-end of `realms_path` over raw realm strings.
/// Fails only when one of the realms is not a valid realm name.
pub fn resolve(
    client_realm: &str,
    server_realm: &str,
    capaths: &dyn CapathLookup,
) -> Result<TrustPath> {
    let client_realm = Realm::try_from(client_realm)?;
    let server_realm = Realm::try_from(server_realm)?;
    return Ok(realms_path(&client_realm, &server_realm, capaths));
}
