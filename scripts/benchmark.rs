// scripts/benchmark.rs
use sde_path::ensemble::{simulate_paths, Scheme, SimConfig};
use sde_path::math_utils::{sample_mean, Timer};
use sde_path::models::gbm::Gbm;
use std::env;
use std::fs::File;
use std::io::Write;
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        let os = env::consts::OS.to_string();
        let cpu_cores = num_cpus::get();
        let rust_version = Self::get_rust_version();
        let rustc_flags = env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string());
        let rayon_threads = rayon::current_num_threads();

        Self {
            os,
            cpu_cores,
            rust_version,
            rustc_flags,
            rayon_threads,
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    paths: usize,
    steps: usize,
    time_ms: f64,
    throughput_paths_per_sec: f64,
    mean_terminal: f64,
}

fn run_path_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    let model = Gbm::new(0.05, 0.2);
    let paths_configs = [1_000, 10_000, 100_000];
    let steps = 252;
    let schemes = [Scheme::EulerMaruyama, Scheme::Milstein];

    for &paths in &paths_configs {
        for &scheme in &schemes {
            println!("Benchmarking {} with {} paths...", scheme.name(), paths);

            let cfg = SimConfig {
                scheme,
                paths,
                t0: 0.0,
                tfin: 1.0,
                dt: 1.0 / steps as f64,
                x0: 100.0,
                seed: 42,
            };

            let mut timer = Timer::new();
            timer.start();
            let sampled = simulate_paths(&cfg, &model).expect("Valid configuration");
            let time_ms = timer.elapsed_ms();

            let terminals: Vec<f64> = sampled.iter().map(|p| p.terminal()).collect();
            let throughput = paths as f64 / (time_ms / 1000.0);

            results.push(BenchmarkResult {
                name: format!("{} GBM ({}k paths)", scheme.name(), paths / 1000),
                paths,
                steps,
                time_ms,
                throughput_paths_per_sec: throughput,
                mean_terminal: sample_mean(&terminals),
            });
        }
    }

    results
}

fn write_results_to_csv(results: &[BenchmarkResult], system_info: &SystemInfo, filename: &str) {
    let mut file = File::create(filename).expect("Could not create CSV file");

    // Write system information as comments
    writeln!(file, "# System Information").unwrap();
    writeln!(file, "# OS: {}", system_info.os).unwrap();
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores).unwrap();
    writeln!(file, "# Rust Version: {}", system_info.rust_version).unwrap();
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags).unwrap();
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads).unwrap();
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .unwrap();
    writeln!(file, "#").unwrap();

    // Write CSV header
    writeln!(
        file,
        "Benchmark,Paths,Steps,Time_ms,Throughput_paths_per_sec,Mean_Terminal"
    )
    .unwrap();

    for result in results {
        writeln!(
            file,
            "{},{},{},{:.2},{:.0},{:.6}",
            result.name,
            result.paths,
            result.steps,
            result.time_ms,
            result.throughput_paths_per_sec,
            result.mean_terminal
        )
        .unwrap();
    }

    println!("Results written to {}", filename);
}

fn main() {
    println!("sde-path Benchmark Suite");
    println!("========================\n");

    println!("Gathering system information...");
    let system_info = SystemInfo::gather();

    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    println!("Running path-sampling benchmarks...");
    let results = run_path_benchmarks();

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<35} {:>8} {:>6} {:>12} {:>15} {:>12}",
        "Benchmark", "Paths", "Steps", "Time (ms)", "Throughput", "Mean S_T"
    );
    println!("{:-<80}", "");

    for result in &results {
        println!(
            "{:<35} {:>8} {:>6} {:>12.2} {:>15.0} {:>12.4}",
            result.name,
            result.paths,
            result.steps,
            result.time_ms,
            result.throughput_paths_per_sec,
            result.mean_terminal
        );
    }

    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    write_results_to_csv(&results, &system_info, &filename);

    println!("\nBenchmark complete!");
    println!("Results saved to: {}", filename);
}
