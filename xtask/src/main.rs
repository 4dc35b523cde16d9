use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "wdgraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark both graph representations and compare them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

/// Criterion parameter names, in report column order.
const REPRESENTATIONS: &[&str] = &["edge_list", "adjacency"];

const BENCH: &str = "graph_benchmark";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!(">>> Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.arg("bench").arg("--bench").arg(BENCH);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run bench {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark {BENCH} failed");
    }

    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let results = collect_results(criterion_dir)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Graph Representation Benchmark Report")?;
    writeln!(file)?;

    write!(file, "| Operation |")?;
    for repr in REPRESENTATIONS {
        write!(file, " {repr} (mean) |")?;
    }
    writeln!(file, " adjacency vs edge_list |")?;

    write!(file, "|---|")?;
    for _ in REPRESENTATIONS {
        write!(file, "---|")?;
    }
    writeln!(file, "---|")?;

    for (operation, times) in &results {
        write!(file, "| {operation} |")?;
        for repr in REPRESENTATIONS {
            match times.get(*repr) {
                Some(ns) => write!(file, " {} |", format_time(*ns))?,
                None => write!(file, " N/A |")?,
            }
        }
        match (times.get("edge_list"), times.get("adjacency")) {
            (Some(edge_list), Some(adjacency)) if *adjacency > 0.0 => {
                writeln!(file, " **{:.2}x** |", edge_list / adjacency)?;
            }
            _ => writeln!(file, " - |")?,
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_time(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.0} ns")
    }
}

/// Reads `<operation>/<representation>/new/estimates.json` mean times.
fn collect_results(dir: &Path) -> Result<BTreeMap<String, BTreeMap<String, f64>>> {
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

    for group in fs::read_dir(dir)?.flatten() {
        let operation = group.file_name().to_string_lossy().into_owned();
        if operation == "report" || !group.path().is_dir() {
            continue;
        }

        for repr in REPRESENTATIONS {
            let estimates = group.path().join(repr).join("new").join("estimates.json");
            let Ok(content) = fs::read_to_string(&estimates) else {
                continue;
            };
            let json: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("Malformed {}", estimates.display()))?;
            if let Some(mean) = json
                .get("mean")
                .and_then(|m| m.get("point_estimate"))
                .and_then(serde_json::Value::as_f64)
            {
                results
                    .entry(operation.clone())
                    .or_default()
                    .insert((*repr).to_string(), mean);
            }
        }
    }

    Ok(results)
}
