use super::CapathLookup;
use crate::core::realm::Realm;
use crate::core::trust_path::TrustPath;
use log::debug;

/// Stack entries of the backtracking search. A `Boundary` delimits
/// the candidates pushed for one target: popping it means every
/// candidate of that target was exhausted and the target itself must
/// be dropped from the accepted chain.
enum Entry {
    Candidate(Realm),
    Boundary,
}

/// Sentinel value closing a declared chain: no further hop exists
/// beyond the realm it is declared for.
const CHAIN_END: &str = ".";

/// Searches the declared capaths for a chain of realms connecting
/// the client realm to the server realm. Returns `None` when nothing
/// is declared for the pair or when every declared branch dead-ends,
/// so the caller can fall back to the hierarchical resolution.
///
/// The returned path starts with the client realm, followed by the
/// accepted intermediaries in client-to-target traversal order. The
/// server realm is not part of it, except when the configuration
/// mistakenly declares it as an intermediary: such an entry is kept
/// rather than filtered, so the misconfiguration stays visible.
pub fn search_capaths(
    client_realm: &Realm,
    server_realm: &Realm,
    capaths: &dyn CapathLookup,
) -> Option<TrustPath> {
    let mut intermediaries =
        capaths.lookup(server_realm.as_str(), client_realm.as_str())?;

    // Half-built chain in reverse order, from the final target back
    // towards the client. Grows on acceptance, shrinks on backtrack.
    let mut chain: Vec<Realm> = vec![server_realm.clone()];
    let mut stack: Vec<Entry> = Vec::new();

    'search: loop {
        if intermediaries == CHAIN_END
            || intermediaries == client_realm.as_str()
        {
            // Explicit chain end or direct connection with the
            // client: the accepted chain is complete.
            break;
        }

        debug!(
            "capaths: target {} declares [{}]",
            chain.last().map(|r| r.as_str()).unwrap_or(""),
            intermediaries
        );

        stack.push(Entry::Boundary);
        for candidate in intermediaries.split_whitespace().rev() {
            if candidate == CHAIN_END {
                // A chain end inside a candidate list cuts the whole
                // search, keeping what was accepted so far.
                break 'search;
            }

            // Cycle guard: an intermediary already accepted is never
            // tried again. The server realm itself is not guarded,
            // so a misdeclared server entry passes through.
            if chain[1..].iter().any(|r| r.as_str() == candidate) {
                debug!("capaths: ignoring looping realm {}", candidate);
                continue;
            }

            match Realm::new(candidate) {
                Ok(realm) => stack.push(Entry::Candidate(realm)),
                Err(error) => {
                    debug!(
                        "capaths: ignoring invalid realm {:?}: {}",
                        candidate, error
                    );
                }
            }
        }

        let next_target = loop {
            match stack.pop() {
                Some(Entry::Candidate(realm)) => break Some(realm),
                Some(Entry::Boundary) => {
                    // All candidates for the last accepted target
                    // are exhausted: drop it and keep popping.
                    chain.pop();
                    debug!("capaths: backtrack");
                }
                None => break None,
            }
        };

        let target = match next_target {
            Some(target) => target,
            None => break,
        };

        debug!("capaths: accept intermediary {}", target);
        intermediaries = match capaths
            .lookup(target.as_str(), client_realm.as_str())
        {
            Some(value) => {
                chain.push(target);
                value
            }
            None => {
                // No declaration for this realm: the chain is open
                // and a direct connection is assumed from here.
                chain.push(target);
                break;
            }
        };
    }

    if chain.is_empty() {
        return None;
    }

    // From (SERVER, T1, T2) to (CLIENT, T2, T1).
    let mut path = TrustPath::new(client_realm.clone());
    for realm in chain.into_iter().skip(1).rev() {
        path.push(realm);
    }

    debug!("capaths: resolved {}", path);
    return Some(path);
}

#[cfg(test)]
mod tests {
    use super::super::MapCapaths;
    use super::*;

    fn realm(name: &str) -> Realm {
        return Realm::new(name).unwrap();
    }

    fn path_names(path: &TrustPath) -> Vec<&str> {
        return path.iter().map(|r| r.as_str()).collect();
    }

    #[test]
    fn no_declaration_gives_no_path() {
        let capaths = MapCapaths::new();

        let path = search_capaths(
            &realm("TIVOLI.COM"),
            &realm("IBM.COM"),
            &capaths,
        );

        assert_eq!(None, path);
    }

    #[test]
    fn declared_chain_is_followed_in_order() {
        let mut capaths = MapCapaths::new();
        capaths.insert(
            "IBM.COM",
            "TIVOLI.COM",
            "IBM_LDAPCENTRAL.COM MOONLITE.ORG",
        );
        capaths.insert("IBM_LDAPCENTRAL.COM", "TIVOLI.COM", "LDAPCENTRAL.NET");
        capaths.insert("LDAPCENTRAL.NET", "TIVOLI.COM", ".");

        let path = search_capaths(
            &realm("TIVOLI.COM"),
            &realm("IBM.COM"),
            &capaths,
        )
        .unwrap();

        assert_eq!(
            vec!["TIVOLI.COM", "LDAPCENTRAL.NET", "IBM_LDAPCENTRAL.COM"],
            path_names(&path)
        );
    }

    #[test]
    fn client_echo_means_direct_connection() {
        let mut capaths = MapCapaths::new();
        capaths.insert("IBM.COM", "TIVOLI.COM", "TIVOLI.COM");

        let path = search_capaths(
            &realm("TIVOLI.COM"),
            &realm("IBM.COM"),
            &capaths,
        )
        .unwrap();

        assert_eq!(vec!["TIVOLI.COM"], path_names(&path));
    }

    #[test]
    fn chain_end_at_first_lookup_means_direct_connection() {
        let mut capaths = MapCapaths::new();
        capaths.insert("IBM.COM", "TIVOLI.COM", ".");

        let path = search_capaths(
            &realm("TIVOLI.COM"),
            &realm("IBM.COM"),
            &capaths,
        )
        .unwrap();

        assert_eq!(vec!["TIVOLI.COM"], path_names(&path));
    }

    #[test]
    fn open_chain_assumes_direct_path_from_last_realm() {
        let mut capaths = MapCapaths::new();
        capaths.insert("IBM.COM", "TIVOLI.COM", "MOONLITE.ORG");

        let path = search_capaths(
            &realm("TIVOLI.COM"),
            &realm("IBM.COM"),
            &capaths,
        )
        .unwrap();

        assert_eq!(vec!["TIVOLI.COM", "MOONLITE.ORG"], path_names(&path));
    }

    #[test]
    fn dead_end_candidate_backtracks_to_next_preference() {
        let mut capaths = MapCapaths::new();
        capaths.insert("IBM.COM", "TIVOLI.COM", "A.NET B.NET");
        // A.NET only declares itself, a dead end.
        capaths.insert("A.NET", "TIVOLI.COM", "A.NET");

        let path = search_capaths(
            &realm("TIVOLI.COM"),
            &realm("IBM.COM"),
            &capaths,
        )
        .unwrap();

        assert_eq!(vec!["TIVOLI.COM", "B.NET"], path_names(&path));
    }

    #[test]
    fn cyclic_configuration_terminates_without_path() {
        let mut capaths = MapCapaths::new();
        capaths.insert("IBM.COM", "TIVOLI.COM", "A.NET");
        capaths.insert("A.NET", "TIVOLI.COM", "B.NET");
        capaths.insert("B.NET", "TIVOLI.COM", "A.NET");

        let path = search_capaths(
            &realm("TIVOLI.COM"),
            &realm("IBM.COM"),
            &capaths,
        );

        assert_eq!(None, path);
    }

    #[test]
    fn self_referential_configuration_terminates_without_path() {
        let mut capaths = MapCapaths::new();
        capaths.insert("IBM.COM", "TIVOLI.COM", "IBM.COM");

        let path = search_capaths(
            &realm("TIVOLI.COM"),
            &realm("IBM.COM"),
            &capaths,
        );

        assert_eq!(None, path);
    }

    #[test]
    fn server_realm_mistakenly_declared_as_intermediary_is_kept() {
        let mut capaths = MapCapaths::new();
        capaths.insert(
            "IBM.COM",
            "TIVOLI.COM",
            "IBM_LDAPCENTRAL.COM MOONLITE.ORG",
        );
        // Admin mistake: the target realm itself declared as the
        // intermediary of IBM_LDAPCENTRAL.COM.
        capaths.insert("IBM_LDAPCENTRAL.COM", "TIVOLI.COM", "IBM.COM");

        let path = search_capaths(
            &realm("TIVOLI.COM"),
            &realm("IBM.COM"),
            &capaths,
        )
        .unwrap();

        assert_eq!(
            vec![
                "TIVOLI.COM",
                "MOONLITE.ORG",
                "IBM.COM",
                "IBM_LDAPCENTRAL.COM"
            ],
            path_names(&path)
        );
    }

    #[test]
    fn chain_end_inside_candidate_list_cuts_the_search() {
        let mut capaths = MapCapaths::new();
        capaths.insert("IBM.COM", "TIVOLI.COM", "A.NET");
        capaths.insert("A.NET", "TIVOLI.COM", "B.NET .");

        let path = search_capaths(
            &realm("TIVOLI.COM"),
            &realm("IBM.COM"),
            &capaths,
        )
        .unwrap();

        assert_eq!(vec!["TIVOLI.COM", "A.NET"], path_names(&path));
    }

    #[test]
    fn invalid_realm_in_declaration_is_ignored() {
        let mut capaths = MapCapaths::new();
        capaths.insert("IBM.COM", "TIVOLI.COM", "BAD:NET MOONLITE.ORG");

        let path = search_capaths(
            &realm("TIVOLI.COM"),
            &realm("IBM.COM"),
            &capaths,
        )
        .unwrap();

        assert_eq!(vec!["TIVOLI.COM", "MOONLITE.ORG"], path_names(&path));
    }
}
