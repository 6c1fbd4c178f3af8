use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use wt_analysis::{
    ProductionType, SeparationType, TestDocument, compute_averages, compute_results, sample_times,
};

#[derive(Parser)]
#[command(name = "wt-cli")]
#[command(about = "Well-test analysis - separator rate and GOR calculation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a test document and report advisory warnings
    Validate {
        /// Path to the test YAML file
        test_path: PathBuf,
    },
    /// Compute per-interval rates, GORs and test averages
    Compute {
        /// Path to the test YAML file
        test_path: PathBuf,
        /// Emit machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the 30-minute sampling schedule for a test
    Schedule {
        /// Start time (HH:MM)
        start: String,
        /// Test duration in hours
        hours: u32,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { test_path } => cmd_validate(&test_path),
        Commands::Compute { test_path, json } => cmd_compute(&test_path, json),
        Commands::Schedule { start, hours } => cmd_schedule(&start, hours),
    }
}

fn load_document(test_path: &Path) -> CliResult<TestDocument> {
    let content = fs::read_to_string(test_path)?;
    Ok(serde_yaml::from_str(&content)?)
}

fn cmd_validate(test_path: &Path) -> CliResult<()> {
    println!("Validating test document: {}", test_path.display());
    let doc = load_document(test_path)?;

    println!("✓ Document parses: '{}', {} entries", doc.name, doc.entries.len());

    // Non-monotonic cumulative meters are accepted by the engine (they
    // produce negative interval rates) but usually indicate a meter
    // reset or a transcription error, so flag them here.
    let mut advisories = 0usize;
    let readings: Vec<(&str, Vec<f64>)> = match doc.parameters.separation_type {
        SeparationType::ThreePhase => vec![
            ("meter_oil_bbl", doc.entries.iter().map(|e| e.meter_oil_bbl).collect()),
            ("meter_water_bbl", doc.entries.iter().map(|e| e.meter_water_bbl).collect()),
        ],
        SeparationType::TwoPhase => vec![(
            "meter_liquid_bbl",
            doc.entries.iter().map(|e| e.meter_liquid_bbl).collect(),
        )],
    };
    for (field, values) in readings {
        for (i, pair) in values.windows(2).enumerate() {
            if pair[1] < pair[0] {
                println!(
                    "  advisory: {} decreases between entries {} and {} ({} -> {})",
                    field,
                    i,
                    i + 1,
                    pair[0],
                    pair[1]
                );
                advisories += 1;
            }
        }
    }

    if advisories == 0 {
        println!("✓ Cumulative meter readings are non-decreasing");
    } else {
        println!("{advisories} advisory warning(s); calculation will still run");
    }
    Ok(())
}

fn cmd_compute(test_path: &Path, as_json: bool) -> CliResult<()> {
    let doc = load_document(test_path)?;
    let results = compute_results(&doc.parameters, &doc.entries);
    let averages = compute_averages(&results);

    if as_json {
        let out = json!({
            "name": doc.name,
            "results": results,
            "averages": averages,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Test: {}", doc.name);
    let gas_lift = doc.parameters.production_type == ProductionType::GasLift;

    let mut header = vec![
        ("Time", 8),
        ("Q Oil", 10),
        ("Q Water", 10),
        ("Total Q", 10),
        ("Q Gas", 10),
    ];
    if gas_lift {
        header.push(("Form Gas", 10));
    }
    header.extend([("GOR1", 10), ("GOR2", 10), ("Tot GOR", 10)]);
    if gas_lift {
        header.extend([("GOR1 Fm", 10), ("TotGOR Fm", 10)]);
    }

    let line: Vec<String> = header
        .iter()
        .map(|&(name, width)| format!("{name:>width$}"))
        .collect();
    println!("{}", line.join(" "));

    for r in &results {
        let mut cells = vec![
            format!("{:>8}", r.time.format("%H:%M")),
            format!("{:>10.2}", r.q_oil_bbl_d),
            format!("{:>10.2}", r.q_water_bbl_d),
            format!("{:>10.2}", r.total_liquid_bbl_d),
            format!("{:>10.2}", r.q_gas_mscf_d),
        ];
        if let Some(gl) = &r.gas_lift {
            cells.push(format!("{:>10.2}", gl.formation_gas_mscf_d));
        }
        cells.push(format!("{:>10.2}", r.gor1_scf_stb));
        cells.push(format!("{:>10.1}", r.gor2_scf_stb));
        cells.push(format!("{:>10.1}", r.total_gor_scf_stb));
        if let Some(gl) = &r.gas_lift {
            cells.push(format!("{:>10.1}", gl.gor1_formation_scf_stb));
            cells.push(format!("{:>10.1}", gl.total_gor_formation_scf_stb));
        }
        println!("{}", cells.join(" "));

        for w in &r.warnings {
            println!("    warning [{}]: {}", w.field, w.detail);
        }
    }

    if !averages.is_empty() {
        println!("\nAverages:");
        for (field, value) in &averages.0 {
            println!("  {field:<28} {value:>12.2}");
        }
    }
    Ok(())
}

fn cmd_schedule(start: &str, hours: u32) -> CliResult<()> {
    let start = NaiveTime::parse_from_str(start, "%H:%M")
        .map_err(|_| CliError::InvalidTime(start.to_string()))?;
    for time in sample_times(start, hours) {
        println!("{}", time.format("%H:%M"));
    }
    Ok(())
}
