use crate::error::RealmError;
use std::convert::TryFrom;
use std::fmt;

/// Separator between the name and the realm in a principal string,
/// such as `user@EXAMPLE.COM`.
pub const NAME_REALM_SEPARATOR: char = '@';

/// Separator between the components of a hierarchical realm name.
pub const REALM_COMPONENT_SEPARATOR: char = '.';

const ESCAPE_CHAR: char = '\\';

/// An administrative authentication domain, identified by a
/// validated, immutable name. Realm names must be non empty and must
/// not include '/', ':' nor NUL. Equality and hashing are by exact
/// string value.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Realm {
    name: String,
}

impl Realm {
    pub fn new(name: &str) -> Result<Self, RealmError> {
        check_realm_string(name)?;
        return Ok(Self {
            name: name.to_string(),
        });
    }

    /// Parses a realm from a raw string: the part following an
    /// unescaped `@` if present, the complete string otherwise.
    pub fn parse(name: &str) -> Result<Self, RealmError> {
        match Self::from_principal(name)? {
            Some(realm) => Ok(realm),
            None => Self::new(name),
        }
    }

    /// Extracts the realm of a principal string such as
    /// `user@EXAMPLE.COM`. An `@` preceded by `\` does not separate.
    /// Returns `Ok(None)` if the string carries no realm part.
    pub fn from_principal(principal: &str) -> Result<Option<Self>, RealmError> {
        let mut previous: Option<char> = None;

        for (i, c) in principal.char_indices() {
            if c == NAME_REALM_SEPARATOR && previous != Some(ESCAPE_CHAR) {
                let realm_part = &principal[i + c.len_utf8()..];
                if realm_part.is_empty() {
                    return Ok(None);
                }
                return Ok(Some(Self::new(realm_part)?));
            }
            previous = Some(c);
        }

        return Ok(None);
    }

    pub fn as_str(&self) -> &str {
        return &self.name;
    }

    /// Components of the realm name, most specific label first:
    /// `SALES.EXAMPLE.COM` -> `["SALES", "EXAMPLE", "COM"]`.
    pub fn components(&self) -> Vec<&str> {
        return self.name.split(REALM_COMPONENT_SEPARATOR).collect();
    }

    /// The ancestor realm left after stripping the leading
    /// `component_index` labels, `None` when no label remains.
    pub fn suffix_from(&self, component_index: usize) -> Option<Self> {
        if component_index == 0 {
            return Some(self.clone());
        }

        let mut skipped = 0;
        for (i, c) in self.name.char_indices() {
            if c != REALM_COMPONENT_SEPARATOR {
                continue;
            }
            skipped += 1;
            if skipped == component_index {
                let suffix = &self.name[i + c.len_utf8()..];
                if suffix.is_empty() {
                    return None;
                }
                return Some(Self {
                    name: suffix.to_string(),
                });
            }
        }

        return None;
    }
}

fn check_realm_string(name: &str) -> Result<(), RealmError> {
    if name.is_empty() {
        return Err(RealmError::Empty);
    }

    for c in name.chars() {
        if c == '/' || c == ':' || c == '\0' {
            return Err(RealmError::IllegalCharacter(c));
        }
    }

    return Ok(());
}

impl fmt::Display for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl TryFrom<&str> for Realm {
    type Error = RealmError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        return Self::new(value);
    }
}

impl TryFrom<&String> for Realm {
    type Error = RealmError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        return Self::new(value);
    }
}

impl TryFrom<String> for Realm {
    type Error = RealmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        return Self::new(&value);
    }
}
