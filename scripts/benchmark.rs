// scripts/benchmark.rs
use mc_engine::analytics::bs_analytic;
use mc_engine::math_utils::Timer;
use mc_engine::mc::accumulator::AccumulatorKind;
use mc_engine::mc::pricer::{price_batch, price_european_with_kind, PricingRequest};
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    paths: usize,
    time_ms: f64,
    throughput_paths_per_sec: f64,
    value: f64,
    std_error: f64,
    analytic_value: f64,
}

impl BenchmarkResult {
    fn z_score(&self) -> f64 {
        if self.std_error > 0.0 {
            (self.value - self.analytic_value) / self.std_error
        } else {
            0.0
        }
    }
}

fn reference_request(paths: usize, is_call: bool) -> PricingRequest {
    PricingRequest {
        spot: 100.0,
        strike: 100.0,
        rate: 0.05,
        volatility: 0.2,
        maturity: 1.0,
        path_count: paths,
        seed: 42,
        is_call,
    }
}

fn run_pricing_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    let paths_configs = [10_000, 100_000, 1_000_000];
    let accumulators = [
        (AccumulatorKind::SumOfSquares, "sum-sq"),
        (AccumulatorKind::Welford, "welford"),
    ];

    for &paths in &paths_configs {
        info!(paths = paths, "running pricing benchmarks");

        for is_call in [true, false] {
            let request = reference_request(paths, is_call);
            let analytic = bs_analytic::bs_price(
                request.spot,
                request.strike,
                request.rate,
                request.volatility,
                request.maturity,
                is_call,
            );

            for (kind, kind_name) in accumulators {
                let mut timer = Timer::new();
                timer.start();
                let result = price_european_with_kind(&request, kind);
                let time_ms = timer.elapsed_ms();

                results.push(BenchmarkResult {
                    name: format!(
                        "European {} {} ({}k paths)",
                        if is_call { "Call" } else { "Put" },
                        kind_name,
                        paths / 1000
                    ),
                    paths,
                    time_ms,
                    throughput_paths_per_sec: paths as f64 / (time_ms / 1000.0),
                    value: result.price,
                    std_error: result.std_error,
                    analytic_value: analytic,
                });
            }
        }
    }

    results
}

fn run_batch_benchmark() -> BenchmarkResult {
    let paths = 100_000;
    let requests: Vec<PricingRequest> = (0..64)
        .map(|i| PricingRequest {
            seed: 1_000 + i,
            ..reference_request(paths, true)
        })
        .collect();

    let mut timer = Timer::new();
    timer.start();
    let batch = price_batch(&requests);
    let time_ms = timer.elapsed_ms();

    let n = batch.len() as f64;
    let mean_price = batch.iter().map(|r| r.price).sum::<f64>() / n;
    // independent estimates: the error of their average shrinks by √n
    let pooled_se = (batch.iter().map(|r| r.std_error.powi(2)).sum::<f64>()).sqrt() / n;

    BenchmarkResult {
        name: format!("Batch of {} calls", requests.len()),
        paths: paths * requests.len(),
        time_ms,
        throughput_paths_per_sec: (paths * requests.len()) as f64 / (time_ms / 1000.0),
        value: mean_price,
        std_error: pooled_se,
        analytic_value: bs_analytic::bs_call_price(100.0, 100.0, 0.05, 0.2, 1.0),
    }
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(
        file,
        "Benchmark,Paths,Time_ms,Throughput_paths_per_sec,Value,Std_Error,Analytic_Value,Z_Score"
    )?;

    for result in results {
        writeln!(
            file,
            "{},{},{:.2},{:.0},{:.6},{:.6},{:.6},{:.3}",
            result.name,
            result.paths,
            result.time_ms,
            result.throughput_paths_per_sec,
            result.value,
            result.std_error,
            result.analytic_value,
            result.z_score()
        )?;
    }

    file.flush()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("mc-engine Benchmark Suite");
    println!("=========================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let mut all_results = run_pricing_benchmarks();
    info!("running batch benchmark");
    all_results.push(run_batch_benchmark());

    println!("\n{:=<100}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<100}", "");
    println!(
        "{:<40} {:>9} {:>10} {:>14} {:>10} {:>10} {:>10} {:>7}",
        "Benchmark", "Paths", "Time (ms)", "Throughput", "Value", "Std Err", "Analytic", "z"
    );
    println!("{:-<100}", "");

    for result in &all_results {
        println!(
            "{:<40} {:>9} {:>10.2} {:>14.0} {:>10.4} {:>10.5} {:>10.4} {:>7.2}",
            result.name,
            result.paths,
            result.time_ms,
            result.throughput_paths_per_sec,
            result.value,
            result.std_error,
            result.analytic_value,
            result.z_score()
        );
    }

    println!("{:=<100}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    match write_results_to_csv(&all_results, &system_info, &filename) {
        Ok(()) => info!(file = %filename, "results written"),
        Err(e) => error!(file = %filename, error = %e, "could not write results"),
    }

    println!("\nTo reproduce these results run: cargo run --bin benchmark --release");
}
