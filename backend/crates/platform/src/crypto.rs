//! Cryptographic Utilities

use rand::{RngCore, rngs::OsRng};

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Generate `len` random bytes and return them lower-hex encoded (`2 * len` chars)
pub fn random_hex(len: usize) -> String {
    hex::encode(random_bytes(len))
}

/// True if `s` is non-empty and made only of ASCII hex digits
pub fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Constant-time comparison to prevent timing attacks
///
/// Only the lengths may short-circuit; the content is always fully scanned.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));

        assert!(random_bytes(0).is_empty());
    }

    #[test]
    fn test_random_hex() {
        let salt = random_hex(8);
        assert_eq!(salt.len(), 16);
        assert!(is_hex(&salt));
        assert_eq!(salt, salt.to_lowercase());

        assert_ne!(random_hex(8), random_hex(8));
    }

    #[test]
    fn test_is_hex() {
        assert!(is_hex("0123456789abcdef"));
        assert!(is_hex("ABCDEF"));
        assert!(!is_hex(""));
        assert!(!is_hex("xyz"));
        assert!(!is_hex("ab cd"));
    }

    #[test]
    fn test_constant_time_eq() {
        let a = [1u8, 2, 3, 4];
        let b = [1u8, 2, 3, 4];
        let c = [1u8, 2, 3, 5];
        let d = [1u8, 2, 3];
        assert!(constant_time_eq(&a, &b));
        assert!(!constant_time_eq(&a, &c));
        assert!(!constant_time_eq(&a, &d));
        assert!(constant_time_eq(&[], &[]));
    }
}
