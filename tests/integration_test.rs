// tests/integration_test.rs
use mc_engine::analytics::bs_analytic;
use mc_engine::mc::engine::{EuropeanOption, McConfig, MonteCarloEngine};
use mc_engine::mc::payoffs::Payoff;
use mc_engine::mc::pricer::{mc_price_european, price_european, PricingRequest};
use mc_engine::models::gbm::Gbm;

#[test]
fn test_mc_vs_analytic_reference_call() {
    let s0 = 100.0;
    let k = 100.0;
    let r = 0.05;
    let sigma = 0.2;
    let t = 1.0;

    let result = mc_price_european(s0, k, r, sigma, t, 1_000_000, 42, true)
        .expect("non-negative path count");
    let analytic_price = bs_analytic::bs_call_price(s0, k, r, sigma, t);
    let abs_error = (result.price - analytic_price).abs();

    println!("\nMC Price: {} ± {}", result.price, result.std_error);
    println!("Analytic Price: {}", analytic_price);
    println!("Absolute Error: {}", abs_error);

    assert!((analytic_price - 10.45).abs() < 0.01);
    assert!(abs_error < 0.05, "MC price too far from Black-Scholes: {}", abs_error);
    assert!(
        result.std_error > 0.01 && result.std_error < 0.02,
        "Unexpected standard error: {}",
        result.std_error
    );
}

#[test]
fn test_put_call_parity() {
    let call = PricingRequest {
        spot: 100.0,
        strike: 100.0,
        rate: 0.0,
        volatility: 0.2,
        maturity: 1.0,
        path_count: 1_000_000,
        seed: 7,
        is_call: true,
    };
    let put = PricingRequest {
        is_call: false,
        ..call
    };

    let call_result = price_european(&call);
    let put_result = price_european(&put);

    let gap = call_result.price - put_result.price;
    let expected = bs_analytic::parity_forward(call.spot, call.strike, call.rate, call.maturity);
    let tolerance = 4.0 * (call_result.std_error + put_result.std_error);

    println!("\nCall - Put: {}", gap);
    println!("S - K e^(-rT): {}", expected);
    println!("Tolerance: {}", tolerance);

    assert!(
        (gap - expected).abs() < tolerance,
        "Put-call parity violated: {} vs {} (tol {})",
        gap,
        expected,
        tolerance
    );
}

#[test]
fn test_engine_put_vs_analytic() {
    let model = Gbm::new(100.0, 0.02, 0.25);
    let engine = MonteCarloEngine::new(
        model,
        McConfig {
            paths: 400_000,
            seed: Some(2024),
            ..Default::default()
        },
    )
    .expect("valid configuration");

    for (k, t) in [(90.0, 0.5), (100.0, 1.0), (115.0, 2.0)] {
        let option = EuropeanOption::new(Payoff::EuropeanPut { k }, t);
        let result = engine.price(&option);
        let analytic = bs_analytic::bs_put_price(model.spot, k, model.rate, model.sigma, t);

        let (lo, hi) = result.conf_int_95;
        println!(
            "K={} T={}: MC {} in [{}, {}], analytic {}",
            k, t, result.price, lo, hi, analytic
        );

        assert!(
            (result.price - analytic).abs() < 5.0 * result.std_error,
            "Put K={} T={} off by {} (se {})",
            k,
            t,
            result.price - analytic,
            result.std_error
        );
    }
}

#[test]
fn test_negative_rate() {
    let request = PricingRequest {
        spot: 100.0,
        strike: 95.0,
        rate: -0.01,
        volatility: 0.3,
        maturity: 2.0,
        path_count: 300_000,
        seed: 99,
        is_call: true,
    };

    let result = price_european(&request);
    let analytic = bs_analytic::bs_call_price(100.0, 95.0, -0.01, 0.3, 2.0);

    assert!(result.price > 0.0);
    assert!((result.price - analytic).abs() < 5.0 * result.std_error);
}
