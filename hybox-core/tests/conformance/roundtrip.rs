//! Conformance: round trip for every authorized recipient.

use hybox_core::{decrypt, encrypt, generate_keypair, Encoder, EnvelopeOptions, KeySource};

const SCENARIO: &[u8] = b"Corporations are people, my friend";

#[test]
fn conformance_two_recipients_scenario() {
    let a = generate_keypair().unwrap();
    let b = generate_keypair().unwrap();
    let c = generate_keypair().unwrap();

    let blob = encrypt(SCENARIO, &[a.public_key, b.public_key], &a.public_key, &a.secret_key)
        .unwrap();

    assert_eq!(decrypt(&blob, &a.public_key, &a.secret_key).unwrap(), SCENARIO);
    assert_eq!(decrypt(&blob, &b.public_key, &b.secret_key).unwrap(), SCENARIO);
    assert!(decrypt(&blob, &c.public_key, &c.secret_key).is_err());
}

#[test]
fn conformance_every_recipient_of_many_can_open() {
    let creator = generate_keypair().unwrap();
    let recipients: Vec<_> = (0..10).map(|_| generate_keypair().unwrap()).collect();
    let public_keys: Vec<[u8; 32]> = recipients.iter().map(|kp| kp.public_key).collect();

    let message = b"Hello to many recipients!";
    let blob = encrypt(message, &public_keys, &creator.public_key, &creator.secret_key).unwrap();

    for (i, kp) in recipients.iter().enumerate() {
        let opened = decrypt(&blob, &kp.public_key, &kp.secret_key)
            .unwrap_or_else(|e| panic!("recipient {i} failed: {e}"));
        assert_eq!(opened, message);
    }
}

#[test]
fn conformance_empty_plaintext() {
    let a = generate_keypair().unwrap();
    let blob = encrypt(b"", &[a.public_key], &a.public_key, &a.secret_key).unwrap();
    assert!(decrypt(&blob, &a.public_key, &a.secret_key).unwrap().is_empty());
}

#[test]
fn conformance_binary_plaintext() {
    let a = generate_keypair().unwrap();
    let plaintext: Vec<u8> = (0..=255u8).cycle().take(4099).collect();
    let blob = encrypt(&plaintext, &[a.public_key], &a.public_key, &a.secret_key).unwrap();
    assert_eq!(decrypt(&blob, &a.public_key, &a.secret_key).unwrap(), plaintext);
}

#[test]
fn conformance_stretched_key_roundtrip() {
    let a = generate_keypair().unwrap();
    let b = generate_keypair().unwrap();
    let mut encoder = Encoder::with_options(EnvelopeOptions {
        key_source: KeySource::Stretched,
    });
    let blob = encoder
        .encrypt(SCENARIO, &[b.public_key], &a.public_key, &a.secret_key)
        .unwrap();
    assert_eq!(decrypt(&blob, &b.public_key, &b.secret_key).unwrap(), SCENARIO);
}

#[test]
fn conformance_recipient_need_not_include_creator() {
    let a = generate_keypair().unwrap();
    let b = generate_keypair().unwrap();
    let blob = encrypt(SCENARIO, &[b.public_key], &a.public_key, &a.secret_key).unwrap();
    assert_eq!(decrypt(&blob, &b.public_key, &b.secret_key).unwrap(), SCENARIO);
    assert_eq!(
        decrypt(&blob, &a.public_key, &a.secret_key).unwrap_err(),
        hybox_core::HyboxError::RecipientNotAuthorized
    );
}
