//! Payment callback signature (HMAC-SHA256)
//!
//! The provider signs `"{order_ref}|{payment_ref}"` with the shared
//! secret and sends the hex digest. Verification recomputes the MAC and
//! compares through `Mac::verify_slice`, which is constant-time.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn mac_for(secret: &str, order_ref: &str, payment_ref: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(order_ref.as_bytes());
    mac.update(b"|");
    mac.update(payment_ref.as_bytes());
    mac
}

/// Hex HMAC-SHA256 over `"{order_ref}|{payment_ref}"`
pub fn compute(secret: &str, order_ref: &str, payment_ref: &str) -> String {
    hex::encode(mac_for(secret, order_ref, payment_ref).finalize().into_bytes())
}

/// Constant-time verification of a supplied hex signature
pub fn verify(secret: &str, order_ref: &str, payment_ref: &str, supplied: &str) -> bool {
    let Ok(sig_bytes) = hex::decode(supplied) else {
        return false;
    };
    mac_for(secret, order_ref, payment_ref)
        .verify_slice(&sig_bytes)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "shared-provider-secret";

    #[test]
    fn correct_signature_verifies() {
        let sig = compute(SECRET, "order_orders:abc", "pay_123");
        assert!(verify(SECRET, "order_orders:abc", "pay_123", &sig));
    }

    #[test]
    fn tampered_signature_byte_fails() {
        let mut sig = compute(SECRET, "order_orders:abc", "pay_123");
        // Flip one hex digit
        let last = sig.pop().unwrap();
        sig.push(if last == '0' { '1' } else { '0' });
        assert!(!verify(SECRET, "order_orders:abc", "pay_123", &sig));
    }

    #[test]
    fn changed_order_ref_fails() {
        let sig = compute(SECRET, "order_orders:abc", "pay_123");
        assert!(!verify(SECRET, "order_orders:abd", "pay_123", &sig));
    }

    #[test]
    fn changed_payment_ref_fails() {
        let sig = compute(SECRET, "order_orders:abc", "pay_123");
        assert!(!verify(SECRET, "order_orders:abc", "pay_124", &sig));
    }

    #[test]
    fn changed_secret_fails() {
        let sig = compute(SECRET, "order_orders:abc", "pay_123");
        assert!(!verify("other-secret", "order_orders:abc", "pay_123", &sig));
    }

    #[test]
    fn non_hex_signature_fails_cleanly() {
        assert!(!verify(SECRET, "order_orders:abc", "pay_123", "zz-not-hex"));
        assert!(!verify(SECRET, "order_orders:abc", "pay_123", ""));
    }

    #[test]
    fn separator_is_part_of_the_message() {
        // "a|bc" and "ab|c" must not collide
        let sig = compute(SECRET, "a", "bc");
        assert!(!verify(SECRET, "ab", "c", &sig));
    }
}
