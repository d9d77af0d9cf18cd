//! Parser and validator for OrbitDB database addresses.
//!
//! Every OrbitDB database is named by an address of the form
//! `/orbitdb/<root>/<path>`, where `<root>` is a content identifier (CID) of
//! the database manifest and `<path>` is the human-readable database name.
//!
//! Parsing is lenient about incidental formatting (backslash separators,
//! repeated slashes, a missing protocol prefix) and strict about the root,
//! which must decode as a CID.
//!
//! # Modules
//!
//! - [`address`] — The immutable [`Address`] value and its canonical string form
//! - [`parser`] — [`AddressParser`], generic over the root decoder
//! - [`decoder`] — The [`RootDecoder`] seam and the default [`CidDecoder`]
//! - [`segments`] — Tokenizer shared by validation and parsing
//! - [`error`] — Error types
//!
//! # Example
//!
//! ```
//! use orbit_address::Address;
//!
//! let address = Address::parse(
//!     "/orbitdb/zdpuAuK3BHpS7NvMBivynypqciYCuy2UW77XYBPUYRnLjnw13/v0-db",
//! )
//! .unwrap();
//! assert_eq!(address.root(), "zdpuAuK3BHpS7NvMBivynypqciYCuy2UW77XYBPUYRnLjnw13");
//! assert_eq!(address.path(), "v0-db");
//! ```

pub mod address;
pub mod decoder;
pub mod error;
pub mod parser;
pub mod segments;

pub use address::Address;
pub use decoder::{CidDecoder, DecodedRoot, RootDecoder};
pub use error::{AddressError, DecodeError, Result};
pub use parser::{is_valid, parse, AddressParser};

/// The protocol name that leads every canonical address.
pub const PROTOCOL: &str = "orbitdb";

/// Raw prefix that marks an address as carrying the protocol segment.
pub const PROTOCOL_PREFIX: &str = "/orbit";
