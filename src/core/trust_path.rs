//! Struct to handle the ordered list of realms that must be
//! traversed to authenticate across realm boundaries.

use crate::core::realm::Realm;
use std::fmt;
use std::slice::Iter;

/// Ordered, non-empty sequence of realms to traverse in order to
/// reach a service in another realm. The first realm is always the
/// client realm; the target realm is only included when it is also a
/// climbed common ancestor or is mistakenly declared as an
/// intermediary.
#[derive(Clone, Debug, PartialEq)]
pub struct TrustPath {
    realms: Vec<Realm>,
}

impl TrustPath {
    /// Starts a path anchored on the client realm.
    pub fn new(client_realm: Realm) -> Self {
        return Self {
            realms: vec![client_realm],
        };
    }

    pub(crate) fn push(&mut self, realm: Realm) {
        self.realms.push(realm);
    }

    pub fn iter(&self) -> Iter<Realm> {
        return self.realms.iter();
    }

    pub fn len(&self) -> usize {
        return self.realms.len();
    }

    pub fn get(&self, index: usize) -> Option<&Realm> {
        return self.realms.get(index);
    }

    pub fn first(&self) -> &Realm {
        return &self.realms[0];
    }

    pub fn last(&self) -> &Realm {
        return &self.realms[self.realms.len() - 1];
    }

    pub fn realms(&self) -> &[Realm] {
        return &self.realms;
    }
}

impl From<TrustPath> for Vec<Realm> {
    fn from(path: TrustPath) -> Self {
        return path.realms;
    }
}

impl fmt::Display for TrustPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> =
            self.realms.iter().map(|r| r.as_str()).collect();
        write!(f, "{}", names.join(" -> "))
    }
}
