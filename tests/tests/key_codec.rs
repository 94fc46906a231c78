use ntruenc_api::{Serialize, SerializeSecret};
use ntruenc_params::pqc::ntru::{ALL_PARAMS, EES401EP1};
use ntruenc_pke::{KeyPair, NtruEncrypt, PrivateKey, PublicKey};
use ntruenc_tests::{engine_with_keys, seeded_rng};
use proptest::prelude::*;

#[test]
fn encoded_lengths_match_parameter_sets() {
    for (i, params) in ALL_PARAMS.iter().enumerate().step_by(3) {
        let (ntru, kp) = engine_with_keys(*params, 40 + i as u64);
        assert_eq!(kp.public().export().len(), ntru.public_key_len(), "{}", params.name);
        assert_eq!(kp.private().export().len(), ntru.private_key_len(), "{}", params.name);
    }
}

#[test]
fn public_key_header() {
    let (_, kp) = engine_with_keys(EES401EP1, 41);
    let bytes = kp.public().export();
    assert_eq!(hex::encode(&bytes[..4]), "01910800");
    let private = kp.private().export();
    assert_eq!(hex::encode(&private[..5]), "0191080003");
}

#[test]
fn reimported_keys_find_their_parameter_set() {
    for (i, params) in ALL_PARAMS.iter().enumerate().skip(12) {
        let (_, kp) = engine_with_keys(*params, 50 + i as u64);
        let restored = KeyPair::new(
            PrivateKey::import(&kp.private().export()).unwrap(),
            PublicKey::import(&kp.public().export()).unwrap(),
        )
        .unwrap();
        assert_eq!(NtruEncrypt::from_key_pair(&restored).unwrap().params(), params);
    }
}

#[test]
fn additional_public_key_round_trip() {
    let (ntru, kp) = engine_with_keys(EES401EP1, 60);
    let mut rng = seeded_rng(61);
    let second = ntru.generate_public_key(kp.private(), &mut rng).unwrap();
    let kp2 = KeyPair::new(kp.private().clone(), second).unwrap();
    let ct = ntru.encrypt(kp2.public(), b"two", &mut rng).unwrap();
    assert_eq!(ntru.decrypt(&kp2, ct.as_bytes()).unwrap(), b"two");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn key_codec_is_idempotent(seed in any::<u64>(), index in 0..ALL_PARAMS.len()) {
        let params = ALL_PARAMS[index];
        let ntru = NtruEncrypt::new(params).unwrap();
        let kp = ntru.generate_key_pair(&mut seeded_rng(seed)).unwrap();

        let public = kp.public().to_bytes();
        let private = kp.private().to_bytes_zeroizing();
        let public2 = <PublicKey as Serialize>::from_bytes(&public).unwrap();
        let private2 = <PrivateKey as SerializeSecret>::from_bytes(&private).unwrap();

        prop_assert_eq!(&public2, kp.public());
        prop_assert_eq!(&private2, kp.private());
        prop_assert_eq!(public2.to_bytes(), public);
        prop_assert_eq!(&private2.to_bytes_zeroizing()[..], &private[..]);
    }

    #[test]
    fn truncated_keys_are_rejected(seed in any::<u64>(), cut in 1usize..64) {
        let ntru = NtruEncrypt::new(EES401EP1).unwrap();
        let kp = ntru.generate_key_pair(&mut seeded_rng(seed)).unwrap();
        let public = kp.public().export();
        let private = kp.private().export();
        prop_assert!(PublicKey::import(&public[..public.len() - cut]).is_err());
        prop_assert!(PrivateKey::import(&private[..private.len() - cut]).is_err());
    }
}
