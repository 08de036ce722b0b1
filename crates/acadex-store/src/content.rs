//! Content-address derivation for stored documents.

use acadex_core::Cid;

/// Derive the content address for a document: BLAKE3 digest of the bytes,
/// base58-encoded. Everything outside the content store treats the result
/// as an opaque string.
pub fn derive_cid(bytes: &[u8]) -> Cid {
    let digest = blake3::hash(bytes);
    Cid::new(bs58::encode(digest.as_bytes()).into_string())
}
