use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::decoder::{CidDecoder, DecodedRoot, RootDecoder};
use crate::error::{AddressError, Result};
use crate::PROTOCOL;

/// A parsed OrbitDB database address.
///
/// An `Address` pairs a content-identifier `root` with a human-readable
/// `path`. Values produced by [`Address::parse`] have a root that decodes as
/// a CID; values built with [`Address::new`] are taken as given.
///
/// The canonical string form is `/orbitdb/<root>/<path>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    root: String,
    path: String,
}

impl Address {
    /// Build an address from already-known parts. No validation is performed.
    pub fn new(root: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            path: path.into(),
        }
    }

    /// Parse and validate a raw address string.
    ///
    /// Fails with [`AddressError::InvalidAddress`] when the input is empty or
    /// its root does not decode as a content identifier.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self> {
        crate::parser::parse(raw)
    }

    /// Parse an address that may be absent. `None` is an invalid address.
    pub fn parse_optional(raw: Option<&str>) -> Result<Self> {
        match raw {
            Some(raw) => Self::parse(raw),
            None => Err(AddressError::invalid("<none>")),
        }
    }

    /// Returns `true` if `candidate` would parse successfully.
    pub fn is_valid(candidate: impl AsRef<str>) -> bool {
        crate::parser::is_valid(candidate)
    }

    /// The content-identifier root.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The path below the root, segments joined by `/`. May be empty.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Consume the address, returning `(root, path)`.
    pub fn into_parts(self) -> (String, String) {
        (self.root, self.path)
    }

    /// Decode the root with the default [`CidDecoder`].
    pub fn decode_root(&self) -> Result<DecodedRoot> {
        CidDecoder
            .decode(&self.root)
            .map_err(|_| AddressError::invalid(self.to_string()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{PROTOCOL}/{}/{}", self.root, self.path)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
