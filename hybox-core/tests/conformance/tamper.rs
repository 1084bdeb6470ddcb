//! Conformance: tamper detection per blob region.
//!
//! Offsets for a blob with plaintext length P and one recipient:
//! nonce [0, 12), length [12, 28), ciphertext [28, 44 + P),
//! creator key [44 + P, 76 + P), record [76 + P, 168 + P).

use hybox_core::{decrypt, encrypt, generate_keypair, HyboxError, KeyPair};

const PLAINTEXT: &[u8] = b"tamper-evident payload";

fn sealed_for(owner: &KeyPair) -> Vec<u8> {
    encrypt(PLAINTEXT, &[owner.public_key], &owner.public_key, &owner.secret_key).unwrap()
}

fn ciphertext_range() -> std::ops::Range<usize> {
    28..28 + PLAINTEXT.len() + 16
}

#[test]
fn conformance_every_ciphertext_bit_flip_is_detected() {
    let a = generate_keypair().unwrap();
    let blob = sealed_for(&a);

    for byte in ciphertext_range() {
        for bit in 0..8 {
            let mut bad = blob.clone();
            bad[byte] ^= 1 << bit;
            assert_eq!(
                decrypt(&bad, &a.public_key, &a.secret_key).unwrap_err(),
                HyboxError::PayloadDecryptionFailed,
                "flip at byte {byte} bit {bit} not detected"
            );
        }
    }
}

#[test]
fn conformance_cipher_nonce_flip_is_detected() {
    let a = generate_keypair().unwrap();
    let mut blob = sealed_for(&a);
    blob[3] ^= 0x01;
    assert_eq!(
        decrypt(&blob, &a.public_key, &a.secret_key).unwrap_err(),
        HyboxError::PayloadDecryptionFailed
    );
}

#[test]
fn conformance_creator_key_flip_fails_unseal() {
    let a = generate_keypair().unwrap();
    let mut blob = sealed_for(&a);
    let creator_at = ciphertext_range().end;
    blob[creator_at] ^= 0x01;
    assert_eq!(
        decrypt(&blob, &a.public_key, &a.secret_key).unwrap_err(),
        HyboxError::KeyUnsealFailed
    );
}

#[test]
fn conformance_box_nonce_flip_fails_unseal() {
    let a = generate_keypair().unwrap();
    let mut blob = sealed_for(&a);
    let record_at = ciphertext_range().end + 32;
    blob[record_at + 20] ^= 0x01;
    assert_eq!(
        decrypt(&blob, &a.public_key, &a.secret_key).unwrap_err(),
        HyboxError::KeyUnsealFailed
    );
}

#[test]
fn conformance_sealed_key_flip_fails_unseal() {
    let a = generate_keypair().unwrap();
    let mut blob = sealed_for(&a);
    let record_at = ciphertext_range().end + 32;
    blob[record_at + 44 + 47] ^= 0x80;
    assert_eq!(
        decrypt(&blob, &a.public_key, &a.secret_key).unwrap_err(),
        HyboxError::KeyUnsealFailed
    );
}

#[test]
fn conformance_fingerprint_flip_hides_record() {
    let a = generate_keypair().unwrap();
    let mut blob = sealed_for(&a);
    let record_at = ciphertext_range().end + 32;
    blob[record_at] ^= 0x01;
    assert_eq!(
        decrypt(&blob, &a.public_key, &a.secret_key).unwrap_err(),
        HyboxError::RecipientNotAuthorized
    );
}

#[test]
fn conformance_length_field_corruption_is_malformed() {
    let a = generate_keypair().unwrap();
    let mut blob = sealed_for(&a);
    blob[20] = b'x';
    assert_eq!(
        decrypt(&blob, &a.public_key, &a.secret_key).unwrap_err(),
        HyboxError::MalformedBlob("non-numeric length field")
    );
}

#[test]
fn conformance_truncation_never_yields_plaintext() {
    let a = generate_keypair().unwrap();
    let blob = sealed_for(&a);
    for cut in 0..blob.len() {
        assert!(
            decrypt(&blob[..cut], &a.public_key, &a.secret_key).is_err(),
            "truncation to {cut} bytes opened"
        );
    }
}
