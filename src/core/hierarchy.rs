//! Fallback resolution that infers the trust chain from the
//! hierarchical, DNS-like structure of the realm names, used when no
//! capath is declared for a pair of realms.

use crate::core::realm::Realm;
use crate::core::trust_path::TrustPath;
use log::debug;

/// Builds the realms chain implied by the naming hierarchy: climb
/// from the client realm up to the common ancestor of both realms,
/// then descend towards the server realm, which is left out. With no
/// common ancestor a single direct cross-realm hop is assumed. Never
/// fails and never returns less than the client realm alone.
pub fn hierarchy_path(
    client_realm: &Realm,
    server_realm: &Realm,
) -> TrustPath {
    let client_components = client_realm.components();
    let server_components = server_realm.components();

    let common = common_suffix_len(&client_components, &server_components);
    debug!(
        "hierarchy: {} and {} share {} component(s)",
        client_realm, server_realm, common
    );

    let mut path = TrustPath::new(client_realm.clone());
    if common == 0 {
        // Unrelated namespaces, assume direct trust between them.
        return path;
    }

    let client_tail = client_components.len() - common;
    let server_tail = server_components.len() - common;

    // Climb to the common ancestor, which is included. When the
    // server realm is itself the ancestor it stays in the path as
    // the last climbed realm.
    for strip in 1..=client_tail {
        if let Some(ancestor) = client_realm.suffix_from(strip) {
            path.push(ancestor);
        }
    }

    // Descend from just below the common ancestor towards the server
    // realm, excluding the server realm itself.
    for strip in (1..server_tail).rev() {
        if let Some(realm) = server_realm.suffix_from(strip) {
            path.push(realm);
        }
    }

    debug!("hierarchy: resolved {}", path);
    return path;
}

fn common_suffix_len(a: &[&str], b: &[&str]) -> usize {
    return a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn realm(name: &str) -> Realm {
        return Realm::new(name).unwrap();
    }

    fn path_names(path: &TrustPath) -> Vec<&str> {
        return path.iter().map(|r| r.as_str()).collect();
    }

    #[test]
    fn no_common_suffix_assumes_direct_trust() {
        let path = hierarchy_path(&realm("DEV.NET"), &realm("OPS.ORG"));
        assert_eq!(vec!["DEV.NET"], path_names(&path));
    }

    #[test]
    fn sibling_realms_meet_at_their_parent() {
        let path = hierarchy_path(
            &realm("SALES.EXAMPLE.COM"),
            &realm("ENG.EXAMPLE.COM"),
        );
        assert_eq!(
            vec!["SALES.EXAMPLE.COM", "EXAMPLE.COM"],
            path_names(&path)
        );
    }

    #[test]
    fn client_ancestor_of_server_is_a_direct_hop() {
        let path = hierarchy_path(
            &realm("EXAMPLE.COM"),
            &realm("ENG.EXAMPLE.COM"),
        );
        assert_eq!(vec!["EXAMPLE.COM"], path_names(&path));
    }

    #[test]
    fn server_ancestor_of_client_ends_the_climb() {
        let path = hierarchy_path(&realm("A.B.C.COM"), &realm("COM"));
        assert_eq!(
            vec!["A.B.C.COM", "B.C.COM", "C.COM", "COM"],
            path_names(&path)
        );
    }

    #[test]
    fn climb_and_descend_around_the_common_ancestor() {
        let path = hierarchy_path(
            &realm("X.A.COM"),
            &realm("Y.B.A.COM"),
        );
        assert_eq!(
            vec!["X.A.COM", "A.COM", "B.A.COM"],
            path_names(&path)
        );
    }

    #[test]
    fn deep_descend_excludes_the_server_realm() {
        let path = hierarchy_path(
            &realm("EXAMPLE.COM"),
            &realm("A.B.EXAMPLE.COM"),
        );
        assert_eq!(
            vec!["EXAMPLE.COM", "B.EXAMPLE.COM"],
            path_names(&path)
        );
    }

    #[test]
    fn path_always_starts_with_the_client_realm() {
        let client = realm("SALES.EXAMPLE.COM");
        let path = hierarchy_path(&client, &realm("OPS.ORG"));
        assert_eq!(&client, path.first());
    }
}
