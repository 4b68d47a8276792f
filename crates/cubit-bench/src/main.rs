use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use cubit_bench::report;
use cubit_bench::runner::BenchmarkRunner;
use cubit_bench::scenes;

fn usage() {
    eprintln!("Usage: bench-runner [OPTIONS]");
    eprintln!("  --baseline <path>              Load baseline JSON for comparison");
    eprintln!("  --output <path>                Save current results as JSON baseline");
    eprintln!("  --regression-threshold <pct>   Regression threshold percentage (default: 10)");
    eprintln!("  --iterations <n>               Iterations per scene (default: 50)");
}

/// Value following a flag, or exit with a usage error.
fn flag_value<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let Some(raw) = args.get(i) else {
        log::error!("{flag} requires a value");
        usage();
        process::exit(1);
    };
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            log::error!("invalid {flag} value: {raw}");
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut baseline_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut regression_threshold = 10.0f64;
    let mut iterations = 50u32;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--baseline" => {
                i += 1;
                baseline_path = Some(flag_value(&args, i, "--baseline"));
            }
            "--output" => {
                i += 1;
                output_path = Some(flag_value(&args, i, "--output"));
            }
            "--regression-threshold" => {
                i += 1;
                regression_threshold = flag_value(&args, i, "--regression-threshold");
            }
            "--iterations" => {
                i += 1;
                iterations = flag_value(&args, i, "--iterations");
            }
            "--help" | "-h" => {
                usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let runner = BenchmarkRunner::new(iterations);
    let mut results = Vec::new();

    for scene in &scenes::standard_scenes() {
        match runner.run_scene(scene) {
            Ok(result) => results.push(result),
            Err(e) => {
                log::error!("Scene '{}' failed: {e}", scene.name);
                process::exit(1);
            }
        }
    }

    println!("\n## Benchmark Results\n");
    println!("{}", report::format_markdown(&results));

    if let Some(ref path) = output_path {
        let baseline = report::Baseline {
            label: format!("bench-{}", process::id()),
            results: results.clone(),
        };
        if let Err(e) = report::save_baseline(path, &baseline) {
            log::error!("Failed to save baseline to {}: {e}", path.display());
            process::exit(1);
        }
        log::info!("Saved baseline to {}", path.display());
    }

    if let Some(ref path) = baseline_path {
        if let Some(baseline) = report::load_baseline(path) {
            let regressions = report::compare(&results, &baseline, regression_threshold);
            println!(
                "{}",
                report::format_comparison(&regressions, regression_threshold)
            );
            if !regressions.is_empty() {
                eprintln!(
                    "ERROR: {} regressions detected, exiting with code 1",
                    regressions.len()
                );
                process::exit(1);
            }
        } else {
            log::warn!("Baseline file not found: {}", path.display());
        }
    }

    log::info!("Benchmark complete.");
}
