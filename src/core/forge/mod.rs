mod principal;
pub use principal::{new_krbtgt_principal, path_tgt_principals, KRBTGT};
