//! Conformance: keypairs outside the recipient set cannot open.

use hybox_core::{decrypt, encrypt, generate_keypair, HyboxError};

#[test]
fn conformance_outsider_is_not_authorized() {
    let a = generate_keypair().unwrap();
    let b = generate_keypair().unwrap();
    let outsider = generate_keypair().unwrap();

    let blob = encrypt(b"members only", &[a.public_key, b.public_key], &a.public_key, &a.secret_key)
        .unwrap();
    assert_eq!(
        decrypt(&blob, &outsider.public_key, &outsider.secret_key).unwrap_err(),
        HyboxError::RecipientNotAuthorized
    );
}

#[test]
fn conformance_zero_recipients_opens_for_nobody() {
    let a = generate_keypair().unwrap();
    let blob = encrypt(b"sealed away", &[], &a.public_key, &a.secret_key).unwrap();
    assert_eq!(
        decrypt(&blob, &a.public_key, &a.secret_key).unwrap_err(),
        HyboxError::RecipientNotAuthorized
    );
}

#[test]
fn conformance_stolen_public_key_without_secret_fails_unseal() {
    // Presenting B's public key with the outsider's secret key finds B's
    // record by fingerprint but cannot open it.
    let a = generate_keypair().unwrap();
    let b = generate_keypair().unwrap();
    let outsider = generate_keypair().unwrap();

    let blob = encrypt(b"members only", &[b.public_key], &a.public_key, &a.secret_key).unwrap();
    assert_eq!(
        decrypt(&blob, &b.public_key, &outsider.secret_key).unwrap_err(),
        HyboxError::KeyUnsealFailed
    );
}

#[test]
fn conformance_authentication_errors_carry_no_detail() {
    assert_eq!(HyboxError::KeyUnsealFailed.to_string(), "Key unseal failed");
    assert_eq!(
        HyboxError::PayloadDecryptionFailed.to_string(),
        "Payload decryption failed"
    );
}
