//! Content-identifier decoding for address roots.
//!
//! The root of an address must decode as a CID. The binary format belongs to
//! the multiformats `cid` crate; this module only wraps it behind the
//! [`RootDecoder`] trait so parsers can be driven by other decoders.

use std::fmt;

use cid::{Cid, Version};
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Decodes a root token into a content identifier.
pub trait RootDecoder {
    /// Decode `token`, or explain why it is not a content identifier.
    fn decode(&self, token: &str) -> Result<DecodedRoot, DecodeError>;
}

impl<D: RootDecoder + ?Sized> RootDecoder for &D {
    fn decode(&self, token: &str) -> Result<DecodedRoot, DecodeError> {
        (**self).decode(token)
    }
}

/// Default decoder backed by the multiformats `cid` crate.
///
/// Accepts CIDv0 (`Qm...`, base58btc) and multibase-prefixed CIDv1 strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct CidDecoder;

impl RootDecoder for CidDecoder {
    fn decode(&self, token: &str) -> Result<DecodedRoot, DecodeError> {
        let cid = Cid::try_from(token).map_err(|e| DecodeError::new(token, e))?;
        Ok(DecodedRoot::from(&cid))
    }
}

/// The structural parts of a decoded root.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedRoot {
    /// Canonical string encoding of the identifier.
    pub canonical: String,
    /// CID version, 0 or 1.
    pub version: u64,
    /// Multicodec of the addressed content (e.g. `0x71` for dag-cbor).
    pub codec: u64,
    /// Multihash function code (e.g. `0x12` for sha2-256).
    pub hash_code: u64,
    /// Raw digest bytes.
    pub digest: Vec<u8>,
}

impl DecodedRoot {
    /// Hex-encoded digest.
    pub fn digest_hex(&self) -> String {
        hex::encode(&self.digest)
    }
}

impl From<&Cid> for DecodedRoot {
    fn from(cid: &Cid) -> Self {
        let version = match cid.version() {
            Version::V0 => 0,
            Version::V1 => 1,
        };
        Self {
            canonical: cid.to_string(),
            version,
            codec: cid.codec(),
            hash_code: cid.hash().code(),
            digest: cid.hash().digest().to_vec(),
        }
    }
}

impl fmt::Debug for DecodedRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecodedRoot(v{} {})", self.version, self.canonical)
    }
}

impl fmt::Display for DecodedRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const V0: &str = "QmaYU2yN1769TMTXg4f7xcBfxB1YtmEJoLCoTNqVGPxpxe";
    const V1: &str = "zdpuAxdFonijJiojXfzHpze6QfiigGBEpqPDnE1mUh1gKp3sU";
    const DIGEST: &str = "b553249371d805df7bb81e77b06f50626d58f70e2e01c76ed685efe03548d88f";

    #[test]
    fn decodes_cid_v0() {
        let root = CidDecoder.decode(V0).unwrap();
        assert_eq!(root.version, 0);
        assert_eq!(root.codec, 0x70);
        assert_eq!(root.hash_code, 0x12);
        assert_eq!(root.digest_hex(), DIGEST);
        assert_eq!(root.canonical, V0);
    }

    #[test]
    fn decodes_cid_v1_base58() {
        let root = CidDecoder.decode(V1).unwrap();
        assert_eq!(root.version, 1);
        assert_eq!(root.codec, 0x71);
        assert_eq!(root.hash_code, 0x12);
        assert_eq!(root.digest_hex(), DIGEST);
    }

    #[test]
    fn v0_and_v1_of_same_content_share_digest() {
        let v0 = CidDecoder.decode(V0).unwrap();
        let v1 = CidDecoder.decode(V1).unwrap();
        assert_eq!(v0.digest, v1.digest);
        assert_ne!(v0.canonical, v1.canonical);
    }

    #[test]
    fn rejects_truncated_v0() {
        let err = CidDecoder.decode(&V0[..V0.len() - 1]).unwrap_err();
        assert_eq!(err.token, &V0[..V0.len() - 1]);
    }

    #[test]
    fn rejects_garbage() {
        assert!(CidDecoder.decode("not-a-cid").is_err());
        assert!(CidDecoder.decode("QmInvalidCidString").is_err());
        assert!(CidDecoder.decode("").is_err());
    }

    #[test]
    fn decoder_by_reference() {
        let decoder = CidDecoder;
        let by_ref: &dyn RootDecoder = &decoder;
        assert!(by_ref.decode(V0).is_ok());
    }

    #[test]
    fn debug_is_compact() {
        let root = CidDecoder.decode(V0).unwrap();
        assert_eq!(format!("{root:?}"), format!("DecodedRoot(v0 {V0})"));
    }
}
