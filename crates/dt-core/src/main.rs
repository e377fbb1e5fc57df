//! Defect Triage Core - Pareto analysis engine CLI
//!
//! The main entry point for dt-core, handling:
//! - Dataset resolution from the device/sensor catalog
//! - Pareto analysis of resolved or inline observation lists
//! - Configuration validation and snapshot reporting
//! - JSON Schema generation for output types

use clap::{Args, Parser, Subcommand};
use dt_common::error::{format_error_human, StructuredError};
use dt_common::{Error, Observation, OutputFormat, Result, SortOrder, SCHEMA_VERSION};
use dt_config::{validate_settings, ConfigSnapshot};
use dt_core::exit_codes::ExitCode;
use dt_core::logging::{generate_run_id, init_logging, LogConfig};
use dt_core::recompute::{recompute, AnalysisRequest};
use dt_core::{catalog, config, output, schema};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Defect Triage Core - Pareto analysis of device/sensor defect datasets
#[derive(Parser)]
#[command(name = "dt-core")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Path to settings.json
    #[arg(long, global = true, env = "DEFECT_TRIAGE_SETTINGS")]
    settings: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a dataset and run the Pareto analysis
    Analyze(AnalyzeArgs),

    /// List known devices and their sensors
    Datasets(DatasetsArgs),

    /// Validate configuration and report the resolved snapshot
    Check,

    /// Generate JSON Schemas for output types
    Schema(SchemaArgs),

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Device identifier (unknown pairs fall back to the default dataset)
    #[arg(long, default_value = "")]
    device: String,

    /// Sensor identifier
    #[arg(long, default_value = "")]
    sensor: String,

    /// Read observations from a JSON file instead of the catalog ("-" for stdin)
    #[arg(long, conflicts_with_all = ["device", "sensor"])]
    input: Option<PathBuf>,

    /// Override the configured sort order
    #[arg(long)]
    sort_order: Option<SortOrder>,

    /// Override the configured critical threshold
    #[arg(long)]
    threshold: Option<f64>,
}

#[derive(Args, Debug)]
struct DatasetsArgs {
    /// List sensors of one device instead of all devices
    #[arg(long)]
    device: Option<String>,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    /// Type name to generate a schema for
    name: Option<String>,

    /// List available schema types
    #[arg(long, conflicts_with_all = ["name", "all"])]
    list: bool,

    /// Generate all schemas
    #[arg(long, conflicts_with = "name")]
    all: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_env(cli.global.verbose, cli.global.quiet);
    init_logging(&log_config);

    let run_id = generate_run_id();
    let format = cli.global.format;
    let use_color = !cli.global.no_color && std::io::stderr().is_terminal();
    tracing::debug!(run_id = %run_id, "dt-core starting");

    match run(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            match format {
                OutputFormat::Json => eprintln!("{}", StructuredError::from(&err).to_json()),
                _ => eprintln!("{}", format_error_human(&err, use_color)),
            }
            std::process::exit(ExitCode::from(&err).as_i32());
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Analyze(args) => cmd_analyze(args, &cli.global),
        Commands::Datasets(args) => cmd_datasets(args, &cli.global),
        Commands::Check => cmd_check(&cli.global),
        Commands::Schema(args) => cmd_schema(args),
        Commands::Version => cmd_version(cli.global.format),
    }
}

fn cmd_analyze(args: AnalyzeArgs, global: &GlobalOpts) -> Result<ExitCode> {
    let loaded = config::load_settings(global.settings.as_deref())?;
    let mut settings = loaded.settings;

    if let Some(order) = args.sort_order {
        settings.sort_order = order;
    }
    if let Some(threshold) = args.threshold {
        settings.critical_threshold = threshold;
        validate_settings(&settings)
            .map_err(|e| Error::Config(format!("invalid threshold override: {e}")))?;
    }

    let request = match &args.input {
        Some(path) => AnalysisRequest::for_observations(read_observations(path)?),
        None => AnalysisRequest::for_pair(args.device, args.sensor),
    };

    let result = recompute(&request, &settings);
    tracing::info!(
        total = result.total,
        rows = result.rows.len(),
        critical = result.critical_count,
        "analysis complete"
    );

    println!("{}", output::render_result(&result, global.format)?);
    Ok(ExitCode::Clean)
}

/// Read an observation list from a JSON file, or stdin for "-".
fn read_observations(path: &Path) -> Result<Vec<Observation>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    serde_json::from_str(&content).map_err(|e| Error::InvalidObservations(e.to_string()))
}

fn cmd_datasets(args: DatasetsArgs, global: &GlobalOpts) -> Result<ExitCode> {
    match args.device {
        Some(device) => {
            let sensors = catalog::sensors(&device);
            if sensors.is_empty() {
                tracing::warn!(device = %device, "unknown device");
            }
            match global.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "device": device,
                        "sensors": sensors,
                    }))?
                ),
                _ => {
                    for sensor in &sensors {
                        println!("{sensor}");
                    }
                }
            }
        }
        None => {
            let devices = catalog::devices();
            match global.format {
                OutputFormat::Json => {
                    let listing: Vec<_> = devices
                        .iter()
                        .map(|d| {
                            serde_json::json!({
                                "device": d,
                                "sensors": catalog::sensors(d),
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&listing)?);
                }
                _ => {
                    for device in &devices {
                        println!("{device}");
                    }
                }
            }
        }
    }
    Ok(ExitCode::Clean)
}

fn cmd_check(global: &GlobalOpts) -> Result<ExitCode> {
    let loaded = config::load_settings(global.settings.as_deref())?;
    let snapshot = ConfigSnapshot::new(&loaded.settings, &loaded.paths, loaded.raw_json.as_deref());

    match global.format {
        OutputFormat::Json => println!("{}", snapshot.to_json()?),
        _ => {
            println!("Settings source: {}", snapshot.settings_source);
            if let Some(path) = &snapshot.settings_path {
                println!("Settings path: {path}");
            }
            println!("Schema version: {}", snapshot.schema_version);
            println!("Sort order: {}", snapshot.summary.sort_order);
            println!("Critical threshold: {}", snapshot.summary.critical_threshold);
            println!("Snapshot id: {}", snapshot.short_id());
        }
    }
    Ok(ExitCode::Clean)
}

fn cmd_schema(args: SchemaArgs) -> Result<ExitCode> {
    if args.list {
        for (name, desc) in schema::available_schemas() {
            println!("{name}: {desc}");
        }
        return Ok(ExitCode::Clean);
    }

    if args.all {
        println!("{}", serde_json::to_string_pretty(&schema::all_schemas())?);
        return Ok(ExitCode::Clean);
    }

    match args.name.as_deref().and_then(schema::schema_for_type) {
        Some(schema) => {
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(ExitCode::Clean)
        }
        None => {
            eprintln!("unknown schema type; try 'dt-core schema --list'");
            Ok(ExitCode::ArgsError)
        }
    }
}

fn cmd_version(format: OutputFormat) -> Result<ExitCode> {
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "name": "dt-core",
                "version": env!("CARGO_PKG_VERSION"),
                "schema_version": SCHEMA_VERSION,
            }))?
        ),
        _ => println!(
            "dt-core {} (schema {})",
            env!("CARGO_PKG_VERSION"),
            SCHEMA_VERSION
        ),
    }
    Ok(ExitCode::Clean)
}
