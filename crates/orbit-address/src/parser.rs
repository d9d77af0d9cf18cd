//! Validation and parsing of raw address strings.

use tracing::debug;

use crate::address::Address;
use crate::decoder::{CidDecoder, RootDecoder};
use crate::error::{AddressError, Result};
use crate::segments;

/// Substrings a root token must contain before decoding is attempted.
///
/// `zd` leads base58btc CIDv1 dag-cbor roots and `Qm` leads CIDv0 roots.
const ROOT_MARKERS: &[&str] = &["zd", "Qm"];

/// Parses and validates addresses, decoding roots with `D`.
#[derive(Clone, Debug, Default)]
pub struct AddressParser<D = CidDecoder> {
    decoder: D,
}

impl AddressParser<CidDecoder> {
    /// A parser using the multiformats CID decoder.
    pub const fn new() -> Self {
        Self {
            decoder: CidDecoder,
        }
    }
}

impl<D: RootDecoder> AddressParser<D> {
    /// A parser using a custom root decoder.
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    /// The decoder used for roots.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Returns `true` if `candidate` carries a root that decodes.
    ///
    /// Decode failures are reported as `false`, never as errors.
    pub fn is_valid(&self, candidate: impl AsRef<str>) -> bool {
        let segments = segments::split(candidate.as_ref());
        segments
            .first()
            .is_some_and(|root| self.accepts_root(root))
    }

    /// Parse `raw` into an [`Address`].
    ///
    /// The first remaining segment becomes the root and the rest are rejoined
    /// with `/` as the path.
    pub fn parse(&self, raw: impl AsRef<str>) -> Result<Address> {
        let raw = raw.as_ref();
        if raw.is_empty() {
            return Err(AddressError::invalid(raw));
        }

        let segments = segments::split(raw);
        match segments.split_first() {
            Some((root, rest)) if self.accepts_root(root) => {
                Ok(Address::new(root.as_str(), rest.join("/")))
            }
            _ => Err(AddressError::invalid(raw)),
        }
    }

    fn accepts_root(&self, token: &str) -> bool {
        if !ROOT_MARKERS.iter().any(|marker| token.contains(marker)) {
            debug!(token, "root token carries no CID marker");
            return false;
        }
        match self.decoder.decode(token) {
            Ok(_) => true,
            Err(e) => {
                debug!(token, error = %e, "root token failed to decode");
                false
            }
        }
    }
}

/// Returns `true` if `candidate` is a valid address.
///
/// ```
/// assert!(orbit_address::is_valid(
///     "/orbitdb/QmaYU2yN1769TMTXg4f7xcBfxB1YtmEJoLCoTNqVGPxpxe/first-db"
/// ));
/// assert!(!orbit_address::is_valid("/orbitdb/not-a-cid/first-db"));
/// ```
pub fn is_valid(candidate: impl AsRef<str>) -> bool {
    AddressParser::new().is_valid(candidate)
}

/// Parse a raw address string with the default CID decoder.
pub fn parse(raw: impl AsRef<str>) -> Result<Address> {
    AddressParser::new().parse(raw)
}
