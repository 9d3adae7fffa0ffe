use crate::core::realm::Realm;
use crate::core::trust_path::TrustPath;
use kerberos_asn1::PrincipalName;
use kerberos_constants::principal_names;

pub const KRBTGT: &str = "krbtgt";

/// Creates the principal of the ticket granting service of a realm,
/// such as `krbtgt/EXAMPLE.COM`.
pub fn new_krbtgt_principal(service_realm: &Realm) -> PrincipalName {
    return PrincipalName {
        name_type: principal_names::NT_SRV_INST,
        name_string: vec![
            KRBTGT.to_string(),
            service_realm.to_string(),
        ],
    };
}

/// TGS principals to request, hop by hop, to chain TGTs along a
/// resolved path: each entry pairs an issuing realm with the krbtgt
/// principal of the next realm to reach. The final hop names the
/// server realm, unless the path already ends on it.
pub fn path_tgt_principals(
    path: &TrustPath,
    server_realm: &Realm,
) -> Vec<(Realm, PrincipalName)> {
    let mut hops = Vec::new();

    for pair in path.realms().windows(2) {
        hops.push((pair[0].clone(), new_krbtgt_principal(&pair[1])));
    }

    let last = path.last();
    if last != server_realm || path.len() == 1 {
        hops.push((last.clone(), new_krbtgt_principal(server_realm)));
    }

    return hops;
}
