use ntruenc_params::pqc::ntru::{ALL_PARAMS, EES1087EP2, EES443EP1};
use ntruenc_pke::{Error, PublicKey};
use ntruenc_tests::{engine_with_keys, message, seeded_rng, FailingRng};

#[test]
fn every_parameter_set_round_trips() {
    for (i, params) in ALL_PARAMS.iter().enumerate() {
        let (ntru, kp) = engine_with_keys(*params, i as u64);
        let max = ntru.max_msg_len();
        let mut rng = seeded_rng(1000 + i as u64);

        for len in [0, 1, max / 2, max] {
            let msg = message(len);
            let ct = ntru.encrypt(kp.public(), &msg, &mut rng).unwrap();
            assert_eq!(ct.as_bytes().len(), ntru.ciphertext_len(), "{}", params.name);
            assert_eq!(ntru.decrypt(&kp, ct.as_bytes()).unwrap(), msg, "{} len {}", params.name, len);
        }
    }
}

#[test]
fn every_message_length_round_trips() {
    let (ntru, kp) = engine_with_keys(EES443EP1, 1);
    let mut rng = seeded_rng(2);
    for len in 0..=ntru.max_msg_len() {
        let msg = message(len);
        let ct = ntru.encrypt(kp.public(), &msg, &mut rng).unwrap();
        assert_eq!(ntru.decrypt(&kp, ct.as_bytes()).unwrap(), msg, "len {}", len);
    }
}

#[test]
fn encryption_is_deterministic_given_the_rng() {
    let (ntru, kp) = engine_with_keys(EES1087EP2, 3);
    let msg = message(40);

    let ct1 = ntru.encrypt(kp.public(), &msg, &mut seeded_rng(4)).unwrap();
    let ct2 = ntru.encrypt(kp.public(), &msg, &mut seeded_rng(4)).unwrap();
    assert_eq!(ct1, ct2);

    let reimported = PublicKey::import(&kp.public().export()).unwrap();
    let ct3 = ntru.encrypt(&reimported, &msg, &mut seeded_rng(4)).unwrap();
    assert_eq!(ct1, ct3);

    let ct4 = ntru.encrypt(kp.public(), &msg, &mut seeded_rng(5)).unwrap();
    assert_ne!(ct1, ct4);
}

#[test]
fn rng_failure_is_fatal() {
    for params in [EES443EP1, EES1087EP2] {
        let (ntru, kp) = engine_with_keys(params, 6);
        assert!(matches!(
            ntru.encrypt(kp.public(), b"m", &mut FailingRng),
            Err(Error::RandomGeneration(_))
        ));
        assert!(matches!(
            ntru.generate_key_pair(&mut FailingRng),
            Err(Error::RandomGeneration(_))
        ));
    }
}
