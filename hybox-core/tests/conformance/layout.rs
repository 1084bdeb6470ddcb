//! Conformance: byte layout and length arithmetic.

use hybox_core::constants::{CIPHER_TAG_LENGTH, RECIPIENT_RECORD_LENGTH};
use hybox_core::envelope::{encoded_len, parse_length};
use hybox_core::{encrypt, fingerprint, generate_keypair, EnvelopeView};

#[test]
fn conformance_blob_length_formula() {
    let a = generate_keypair().unwrap();
    let others: Vec<_> = (0..3).map(|_| generate_keypair().unwrap().public_key).collect();

    for r in [0usize, 1, 3] {
        let blob = encrypt(b"layout", &others[..r], &a.public_key, &a.secret_key).unwrap();
        let ct_len = 6 + CIPHER_TAG_LENGTH;
        assert_eq!(blob.len(), 12 + 16 + ct_len + 32 + RECIPIENT_RECORD_LENGTH * r);
        assert_eq!(blob.len(), encoded_len(ct_len, r));
    }
}

#[test]
fn conformance_length_field_is_sixteen_ascii_digits() {
    let a = generate_keypair().unwrap();
    let blob = encrypt(&[0u8; 1234], &[a.public_key], &a.public_key, &a.secret_key).unwrap();
    let field: [u8; 16] = blob[12..28].try_into().unwrap();
    assert!(field.iter().all(u8::is_ascii_digit));
    assert_eq!(&field, b"0000000000001250");
    assert_eq!(parse_length(&field).unwrap(), 1250);
}

#[test]
fn conformance_records_carry_recipient_fingerprints() {
    let a = generate_keypair().unwrap();
    let b = generate_keypair().unwrap();
    let blob = encrypt(b"fp", &[b.public_key, a.public_key], &a.public_key, &a.secret_key)
        .unwrap();

    let view = EnvelopeView::parse(&blob).unwrap();
    let records: Vec<_> = view.records().collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].fingerprint, fingerprint(&b.public_key));
    assert_eq!(records[1].fingerprint, fingerprint(&a.public_key));
    assert_eq!(view.creator_public_key(), &a.public_key);
}

#[test]
fn conformance_fingerprint_stability() {
    let keys: Vec<_> = (0..16).map(|_| generate_keypair().unwrap().public_key).collect();
    let mut seen = std::collections::HashSet::new();
    for key in &keys {
        let fp = fingerprint(key);
        assert_eq!(fp.len(), 20);
        assert_eq!(fp, fingerprint(key));
        assert!(seen.insert(fp), "fingerprint collision in test vectors");
    }
}
