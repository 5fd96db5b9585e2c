// tests/pricer_properties_test.rs
use approx::assert_relative_eq;
use mc_engine::mc::accumulator::AccumulatorKind;
use mc_engine::mc::pricer::{
    price_batch, price_european, price_european_with_kind, sample_discounted_payoffs,
    PricingRequest,
};
use proptest::prelude::*;

fn request(path_count: usize, seed: u64) -> PricingRequest {
    PricingRequest {
        spot: 100.0,
        strike: 100.0,
        rate: 0.05,
        volatility: 0.2,
        maturity: 1.0,
        path_count,
        seed,
        is_call: true,
    }
}

#[test]
fn test_determinism_is_bit_exact() {
    let req = request(100_000, 42);
    let a = price_european(&req);
    let b = price_european(&req);

    assert_eq!(a.price.to_bits(), b.price.to_bits());
    assert_eq!(a.std_error.to_bits(), b.std_error.to_bits());

    let w1 = price_european_with_kind(&req, AccumulatorKind::Welford);
    let w2 = price_european_with_kind(&req, AccumulatorKind::Welford);
    assert_eq!(w1.price.to_bits(), w2.price.to_bits());
}

#[test]
fn test_concurrent_calls_are_independent() {
    let requests: Vec<PricingRequest> = (0..16).map(|i| request(10_000, i % 4)).collect();
    let results = price_batch(&requests);

    for (i, result) in results.iter().enumerate() {
        // same seed → same result regardless of scheduling
        assert_eq!(*result, results[i % 4]);
        assert_eq!(*result, price_european(&requests[i]));
    }
}

#[test]
fn test_seed_sensitivity() {
    let a = price_european(&request(1_000, 1));
    let b = price_european(&request(1_000, 2));
    assert_ne!(a.price, b.price);

    // a single at-the-money path often pays nothing, so compare the draw itself
    let (s1, _) = sample_discounted_payoffs(&request(1, 1))[0];
    let (s2, _) = sample_discounted_payoffs(&request(1, 2))[0];
    assert_ne!(s1, s2);

    // deep in the money: every path pays, and the price follows S_T
    let deep = |seed| PricingRequest {
        strike: 1.0,
        ..request(1, seed)
    };
    let c = price_european(&deep(1));
    let d = price_european(&deep(2));
    assert!(c.price > 0.0 && d.price > 0.0);
    assert_ne!(c.price, d.price);
}

#[test]
fn test_zero_volatility_collapses_to_forward() {
    let (spot, strike, rate, maturity) = (100.0, 100.0, 0.05, 1.0);
    let req = PricingRequest {
        volatility: 0.0,
        path_count: 10_000,
        ..request(0, 3)
    };

    let result = price_european(&req);
    let forward = spot * f64::exp(rate * maturity);
    let expected = f64::exp(-rate * maturity) * (forward - strike);

    assert_relative_eq!(result.price, expected, max_relative = 1e-10);
    assert!(result.std_error < 1e-6, "std_error {}", result.std_error);

    let put = price_european(&PricingRequest {
        is_call: false,
        ..req
    });
    assert_eq!(put.price, 0.0);
    assert_eq!(put.std_error, 0.0);
}

#[test]
fn test_zero_maturity_is_intrinsic() {
    let req = PricingRequest {
        spot: 110.0,
        maturity: 0.0,
        path_count: 5_000,
        ..request(0, 11)
    };

    let result = price_european(&req);
    assert_eq!(result.price, 10.0);
    assert_eq!(result.std_error, 0.0);
}

#[test]
fn test_std_error_shrinks_with_sqrt_n() {
    let small = price_european(&request(10_000, 5));
    let large = price_european(&request(1_000_000, 5));

    let ratio = small.std_error / large.std_error;
    println!("\nstd_error ratio for 100x paths: {}", ratio);
    assert!(ratio > 8.5 && ratio < 11.5, "ratio {}", ratio);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_zero_paths_price_to_zero(
        spot in proptest::num::f64::ANY,
        strike in proptest::num::f64::ANY,
        rate in proptest::num::f64::ANY,
        volatility in proptest::num::f64::ANY,
        maturity in proptest::num::f64::ANY,
        seed in any::<u64>(),
        is_call in any::<bool>(),
    ) {
        let result = price_european(&PricingRequest {
            spot,
            strike,
            rate,
            volatility,
            maturity,
            path_count: 0,
            seed,
            is_call,
        });
        prop_assert_eq!(result.price, 0.0);
        prop_assert_eq!(result.std_error, 0.0);
    }

    #[test]
    fn prop_price_and_error_are_non_negative(
        spot in 1.0f64..500.0,
        strike in 1.0f64..500.0,
        rate in -0.1f64..0.2,
        volatility in 0.0f64..1.0,
        maturity in 0.0f64..5.0,
        path_count in 0usize..200,
        seed in any::<u64>(),
        is_call in any::<bool>(),
    ) {
        let result = price_european(&PricingRequest {
            spot,
            strike,
            rate,
            volatility,
            maturity,
            path_count,
            seed,
            is_call,
        });
        prop_assert!(result.price >= 0.0 && result.price.is_finite());
        prop_assert!(result.std_error >= 0.0 && result.std_error.is_finite());
    }
}
