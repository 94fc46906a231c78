use ntruenc_algorithms::hash::provider;
use ntruenc_algorithms::{invert, random_tern, IntPoly};
use ntruenc_params::pqc::ntru::{EES1087EP2, EES401EP1};
use ntruenc_pke::ntru::igf::IndexGenerator;
use ntruenc_pke::ntru::mgf::generate_mask;
use ntruenc_tests::seeded_rng;

#[test]
fn toy_ring_multiplication_and_inverse() {
    let a = IntPoly::from_coeffs(vec![-1, 1, 1, 0, -1, 0, 1, 0, 0, 1, -1]);
    let b = IntPoly::from_coeffs(vec![14, 11, 26, 24, 14, 16, 30, 7, 25, 6, 19]);
    let expected = IntPoly::from_coeffs(vec![3, 25, -10, 21, 10, 7, 6, 7, 5, 29, -7]);
    assert!(a.mul(&b, 32).unwrap().equals_mod(&expected, 32));

    let inv = invert(&a, 32).unwrap().unwrap();
    let expected_inv = IntPoly::from_coeffs(vec![5, -23, 6, 16, 4, 15, 16, -10, -12, -14, -2]);
    assert!(inv.equals_mod(&expected_inv, 32));
    assert!(a.mul(&inv, 32).unwrap().equals_one());
}

#[test]
fn sampled_inverses_multiply_to_one() {
    let mut rng = seeded_rng(70);
    let mut found = 0;
    for _ in 0..20 {
        let a = random_tern(EES401EP1.n, 120, 119, &mut rng).unwrap().to_int_poly();
        if let Some(inv) = invert(&a, 2048).unwrap() {
            assert!(a.mul(&inv, 2048).unwrap().equals_one());
            found += 1;
        }
    }
    assert!(found > 0);
}

#[test]
fn index_generator_is_uniform() {
    let params = EES1087EP2;
    let n = params.n as usize;
    let mut igf = IndexGenerator::new(b"integration", &params, provider(params.hash)).unwrap();

    let mut hits = vec![0u32; n];
    let mut total = 0u64;
    let draws = 200_000;
    for _ in 0..draws {
        let i = igf.next_index().unwrap() as usize;
        hits[i] += 1;
        total += i as u64;
    }
    assert!(hits.iter().all(|&h| h > 0));
    let mean = total as f64 / draws as f64;
    let expected = (n - 1) as f64 / 2.0;
    assert!((mean - expected).abs() < expected * 0.01, "mean {}", mean);
}

#[test]
fn mask_is_balanced_ternary() {
    let params = EES1087EP2;
    let mask = generate_mask(b"mask seed", &params, provider(params.hash));
    assert_eq!(mask.n(), params.n as usize);
    for v in [-1, 0, 1] {
        let share = mask.count(v) as f64 / params.n as f64;
        assert!((share - 1.0 / 3.0).abs() < 0.06, "{} share {}", v, share);
    }
}
