// demos/error_handling_demo.rs
use mc_engine::error::McError;
use mc_engine::mc::engine::{McConfig, MonteCarloEngine};
use mc_engine::mc::pricer::{mc_price_european, price_european, PricingRequest};
use mc_engine::models::gbm::Gbm;

fn main() {
    println!("Error Handling Demo for mc-engine");
    println!("=================================\n");

    // Test 1: Negative path count at the host-facing entry point
    println!("1. Testing negative path count...");

    match mc_price_european(100.0, 100.0, 0.05, 0.2, 1.0, -10, 42, true) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Zero paths is valid and prices to zero
    println!("\n2. Testing zero paths...");

    match mc_price_european(100.0, 100.0, 0.05, 0.2, 1.0, 0, 42, true) {
        Ok(result) => println!("   ✓ Success: {}", result),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 3: Opt-in strict validation
    println!("\n3. Testing strict request validation...");

    let request = PricingRequest {
        spot: -100.0,
        strike: 100.0,
        rate: 0.05,
        volatility: 0.2,
        maturity: 1.0,
        path_count: 10_000,
        seed: 42,
        is_call: true,
    };

    match request.validate() {
        Ok(()) => println!("   Unexpected: Should have failed!"),
        Err(McError::InvalidParameters {
            parameter,
            value,
            constraint,
        }) => {
            println!(
                "   ✓ Caught InvalidParameters: {} = {} ({})",
                parameter, value, constraint
            );
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    // Test 4: The core never rejects; non-finite inputs propagate
    println!("\n4. Testing non-finite volatility in the core...");

    let infinite_vol = PricingRequest {
        spot: 100.0,
        volatility: f64::INFINITY,
        ..request
    };
    let result = price_european(&infinite_vol);
    println!("   ✓ Core returned price = {} (propagated)", result.price);

    // Test 5: Oversized engine configuration
    println!("\n5. Testing oversized engine configuration...");

    let config = McConfig {
        paths: 2_000_000_000,
        ..Default::default()
    };
    match MonteCarloEngine::new(Gbm::new(100.0, 0.05, 0.2), config) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(McError::InvalidConfiguration { field, reason }) => {
            println!("   ✓ Caught InvalidConfiguration: {} ({})", field, reason);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
}
