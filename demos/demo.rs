// demos/demo.rs
use mc_engine::analytics::{bs_analytic, distribution};
use mc_engine::mc::engine::{EuropeanOption, McConfig, MonteCarloEngine};
use mc_engine::mc::payoffs::Payoff;
use mc_engine::mc::pricer::sample_discounted_payoffs;
use mc_engine::math_utils::Timer;
use mc_engine::models::gbm::Gbm;
use mc_engine::output;
use mc_engine::rng::StdNormalSampler;

fn main() {
    println!("Running mc-engine Monte Carlo Demo\n");

    let model = Gbm::new(100.0, 0.02, 0.2);
    let config = McConfig {
        paths: 200_000,
        seed: Some(42),
        ..Default::default()
    };
    let engine = match MonteCarloEngine::new(model, config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };

    for payoff in [
        Payoff::EuropeanCall { k: 100.0 },
        Payoff::EuropeanPut { k: 100.0 },
    ] {
        let option = EuropeanOption::new(payoff, 1.0);

        let mut timer = Timer::new();
        timer.start();
        let result = engine.price(&option);
        let elapsed = timer.elapsed_ms();

        let analytic = bs_analytic::bs_price(
            model.spot,
            payoff.strike(),
            model.rate,
            model.sigma,
            option.maturity,
            payoff.is_call(),
        );

        println!("{}", payoff);
        println!("  Monte Carlo price:   {:.6}", result.price);
        println!("  Std. error:          {:.6}", result.std_error);
        println!(
            "  95% CI:              [{:.4}, {:.4}]",
            result.conf_int_95.0, result.conf_int_95.1
        );
        println!("  Black-Scholes price: {:.6}", analytic);
        println!("  Time:                {:.2} ms\n", elapsed);
    }

    // Terminal price distribution and a few display paths
    let request = engine.request_for(&EuropeanOption::new(Payoff::EuropeanCall { k: 100.0 }, 1.0));
    let samples = sample_discounted_payoffs(&request);
    let terminal: Vec<f64> = samples.iter().map(|&(st, _)| st).collect();
    let bins = distribution::histogram(&terminal, 100);

    let itm = samples
        .iter()
        .filter(|&&(st, _)| request.payoff().is_in_the_money(st))
        .count();
    println!(
        "Paths finishing ITM/ATM: {} of {} ({:.1}%)",
        itm,
        samples.len(),
        100.0 * itm as f64 / samples.len() as f64
    );

    let mut path_sampler = StdNormalSampler::from_seed(request.seed + 1);
    for i in 0..3 {
        let path = model.simulate_path(1.0, 12, &mut path_sampler);
        let formatted: Vec<String> = path.iter().map(|s| format!("{:.2}", s)).collect();
        println!("Sample path {}: {}", i + 1, formatted.join(" -> "));
    }

    if let Err(e) = output::write_histogram_to_csv("terminal_histogram.csv", &bins) {
        eprintln!("Could not write histogram: {}", e);
    } else {
        println!("\nTerminal price histogram written to terminal_histogram.csv");
    }

    let shown = samples.len().min(1_000);
    if let Err(e) = output::write_samples_to_csv("sample_paths.csv", &samples[..shown]) {
        eprintln!("Could not write samples: {}", e);
    } else {
        println!("First {} path samples written to sample_paths.csv", shown);
    }

    let call = engine.price(&EuropeanOption::new(Payoff::EuropeanCall { k: 100.0 }, 1.0));
    let summary = [
        ("spot", model.spot.to_string()),
        ("strike", request.strike.to_string()),
        ("rate", model.rate.to_string()),
        ("volatility", model.sigma.to_string()),
        ("maturity", request.maturity.to_string()),
        ("paths", request.path_count.to_string()),
        ("seed", request.seed.to_string()),
        ("price", format!("{:.6}", call.price)),
        ("std_error", format!("{:.6}", call.std_error)),
        ("itm_paths", itm.to_string()),
    ];
    if let Err(e) = output::write_summary_to_csv("summary.csv", &summary) {
        eprintln!("Could not write summary: {}", e);
    } else {
        println!("Run summary written to summary.csv");
    }
}
