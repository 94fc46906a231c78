use ntruenc_api::Error as CoreError;
use ntruenc_params::pqc::ntru::{EES401EP1, EES401EP2};
use ntruenc_pke::{Ciphertext, Ees401Ep2, Error};
use ntruenc_tests::{engine_with_keys, message, seeded_rng};

#[test]
fn single_byte_corruption_is_detected() {
    for params in [EES401EP1, EES401EP2] {
        let (ntru, kp) = engine_with_keys(params, 20);
        let ct = ntru
            .encrypt(kp.public(), &message(30), &mut seeded_rng(21))
            .unwrap()
            .into_bytes();

        let mut accepted = 0;
        for pos in 0..ct.len() {
            let mut bad = ct.clone();
            bad[pos] ^= 0x5a;
            match ntru.decrypt(&kp, &bad) {
                Err(Error::DecryptionFailed) => {}
                Ok(_) => accepted += 1,
                Err(e) => panic!("unexpected error {:?}", e),
            }
        }
        assert_eq!(accepted, 0, "{}", params.name);
    }
}

#[test]
fn failures_are_indistinguishable() {
    let (ntru, kp) = engine_with_keys(EES401EP2, 22);
    let (_, other) = engine_with_keys(EES401EP2, 23);
    let mut rng = seeded_rng(24);

    let ct = ntru.encrypt(kp.public(), b"secret", &mut rng).unwrap();
    let mut flipped = ct.clone().into_bytes();
    flipped[10] ^= 0x40;

    let errors = [
        ntru.decrypt(&other, ct.as_bytes()).unwrap_err(),
        ntru.decrypt(&kp, &flipped).unwrap_err(),
        ntru.decrypt(&kp, &vec![0u8; ntru.ciphertext_len()]).unwrap_err(),
        ntru.decrypt(&kp, &vec![0xffu8; ntru.ciphertext_len()]).unwrap_err(),
    ];
    for e in &errors {
        assert_eq!(e, &Error::DecryptionFailed);
        assert_eq!(e.to_string(), "NTRU decryption failed");
    }

    let core: CoreError = errors[0].clone().into();
    assert_eq!(
        core,
        CoreError::DecryptionFailed {
            context: "NTRUEncrypt",
            message: "decryption failed".to_string(),
        }
    );
}

#[test]
fn pke_trait_reports_api_errors() {
    use ntruenc_api::Pke;

    let mut rng = seeded_rng(25);
    let kp = Ees401Ep2::keypair(&mut rng).unwrap();
    let too_long = message(61);
    assert!(matches!(
        Ees401Ep2::encrypt(&Ees401Ep2::public_key(&kp), &too_long, &mut rng),
        Err(CoreError::InvalidLength { expected: 60, actual: 61, .. })
    ));

    let short = Ciphertext::new(vec![0u8; 551]);
    assert_eq!(
        Ees401Ep2::decrypt(&kp, &short),
        Err(CoreError::InvalidLength {
            context: "NTRUEncrypt ciphertext",
            expected: 552,
            actual: 551,
        })
    );
}
