//! HMAC-SHA256 providers for the session token engines.
//!
//! Two interchangeable implementations of the same MAC exist on purpose:
//! the request handlers sign with the `hmac` crate, while the routing gate
//! verifies with a self-contained construction that only needs a SHA-256
//! digest primitive. Both must produce byte-identical output for the same
//! key and data, otherwise a token minted at login would not verify at the
//! gate. The shared RFC 4231 vectors below pin that down.

use hmac::{Hmac, Mac as _};
use sha2::{Digest, Sha256};

const BLOCK_SIZE: usize = 64;

/// Capability interface the token engines sign and verify against.
pub trait Mac256 {
    fn sign(&self, key: &[u8], data: &[u8]) -> [u8; 32];
}

/// HMAC-SHA256 via the RustCrypto `hmac` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCrypto;

impl Mac256 for RustCrypto {
    fn sign(&self, key: &[u8], data: &[u8]) -> [u8; 32] {
        let mut mac =
            Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts keys of any length");
        mac.update(data);
        mac.finalize().into_bytes().into()
    }
}

/// HMAC-SHA256 composed directly from the SHA-256 digest (RFC 2104).
///
/// Used by the routing gate, which is written against the smallest possible
/// primitive surface. Kept interoperable with [`RustCrypto`] by the shared
/// test vectors in this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct Portable;

impl Mac256 for Portable {
    fn sign(&self, key: &[u8], data: &[u8]) -> [u8; 32] {
        let mut block = [0u8; BLOCK_SIZE];
        if key.len() > BLOCK_SIZE {
            block[..32].copy_from_slice(&Sha256::digest(key));
        } else {
            block[..key.len()].copy_from_slice(key);
        }

        let mut ipad = [0x36u8; BLOCK_SIZE];
        let mut opad = [0x5cu8; BLOCK_SIZE];
        for i in 0..BLOCK_SIZE {
            ipad[i] ^= block[i];
            opad[i] ^= block[i];
        }

        let inner = Sha256::new().chain_update(ipad).chain_update(data).finalize();
        let outer = Sha256::new().chain_update(opad).chain_update(inner).finalize();
        outer.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231 test cases 1, 2 and 3 (HMAC-SHA-256).
    const VECTORS: &[(&[u8], &[u8], &str)] = &[
        (
            &[0x0b; 20],
            b"Hi There",
            "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
        ),
        (
            b"Jefe",
            b"what do ya want for nothing?",
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
        ),
        (
            &[0xaa; 20],
            &[0xdd; 50],
            "773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe",
        ),
    ];

    #[test]
    fn rustcrypto_matches_rfc4231() {
        for (key, data, expected) in VECTORS {
            assert_eq!(hex::encode(RustCrypto.sign(key, data)), *expected);
        }
    }

    #[test]
    fn portable_matches_rfc4231() {
        for (key, data, expected) in VECTORS {
            assert_eq!(hex::encode(Portable.sign(key, data)), *expected);
        }
    }

    #[test]
    fn providers_agree_on_oversized_keys() {
        // Keys longer than the SHA-256 block size take the hashed-key path.
        let key = vec![0x61u8; 131];
        let data = b"Test Using Larger Than Block-Size Key - Hash Key First";
        assert_eq!(RustCrypto.sign(&key, data), Portable.sign(&key, data));
    }

    #[test]
    fn providers_agree_on_token_shaped_input() {
        let key = b"dev-admin-secret";
        let data = b"eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiJhZG1pbiJ9";
        assert_eq!(RustCrypto.sign(key, data), Portable.sign(key, data));
    }
}
