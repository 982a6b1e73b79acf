//! engnote CLI - parse and format engineering-notation quantities from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use engnote::{Codec, CodecConfig, Unit};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "engnote")]
#[command(about = "Engineering-notation parser and formatter for electrical quantities", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file with suffix and unit tables (default: built-in tables)
    #[arg(long, value_name = "FILE", global = true)]
    tables: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse values such as "4k7", "1,234.56kΩ" or "2mV"
    Parse {
        /// Values to parse
        #[arg(value_name = "VALUE", required = true, allow_hyphen_values = true)]
        values: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Also resolve the unit kind (fails on unknown units)
        #[arg(long)]
        kind: bool,
    },

    /// Show how a value splits into number, suffix and unit
    Split {
        /// Value to split
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
    },

    /// Format a magnitude with 3 digits and an SI suffix
    Format {
        /// Magnitude, e.g. 0.0025 or 1.2e6
        #[arg(value_name = "MAGNITUDE", allow_negative_numbers = true)]
        magnitude: f64,

        /// Unit symbol appended after the suffix
        #[arg(short, long, default_value = "")]
        unit: String,
    },

    /// Render several values with one shared SI suffix
    Scale {
        /// Values to scale (engineering notation accepted)
        #[arg(value_name = "VALUE", required = true, allow_hyphen_values = true)]
        values: Vec<String>,

        /// Unit symbol (default: unit of the first value)
        #[arg(short, long)]
        unit: Option<String>,
    },

    /// List the suffix and unit tables
    Tables {
        /// Show every accepted alias
        #[arg(short, long)]
        aliases: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let codec = match build_codec(cli.tables.as_deref()) {
        Ok(codec) => codec,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Parse {
            values,
            format,
            kind,
        } => handle_parse(&codec, &values, format, kind),
        Commands::Split { value } => handle_split(&codec, &value),
        Commands::Format { magnitude, unit } => handle_format(&codec, magnitude, &unit),
        Commands::Scale { values, unit } => handle_scale(&codec, &values, unit.as_deref()),
        Commands::Tables { aliases } => {
            handle_tables(&codec, aliases);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn build_codec(tables: Option<&Path>) -> Result<Codec, Box<dyn Error>> {
    let config = match tables {
        Some(path) => CodecConfig::load_from_file(path)?,
        None => CodecConfig::builtin()?,
    };
    Ok(Codec::new(&config)?)
}

fn handle_parse(
    codec: &Codec,
    values: &[String],
    format: OutputFormat,
    kind: bool,
) -> Result<(), Box<dyn Error>> {
    let mut parsed = Vec::with_capacity(values.len());
    for value in values {
        let quantity = codec.parse(value)?;
        let unit_kind = if kind {
            Some(Unit::from_symbol(&quantity.unit)?)
        } else {
            None
        };
        parsed.push((value, quantity, unit_kind));
    }

    match format {
        OutputFormat::Human => {
            for (_, quantity, unit_kind) in &parsed {
                match unit_kind {
                    Some(k) => println!("{} {} ({})", quantity.magnitude, quantity.unit, k.name()),
                    None if quantity.unit.is_empty() => println!("{}", quantity.magnitude),
                    None => println!("{} {}", quantity.magnitude, quantity.unit),
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "results": parsed.iter().map(|(input, quantity, unit_kind)| {
                    serde_json::json!({
                        "input": input,
                        "magnitude": quantity.magnitude,
                        "unit": quantity.unit,
                        "kind": unit_kind.map(|k| k.name()),
                    })
                }).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn handle_split(codec: &Codec, value: &str) -> Result<(), Box<dyn Error>> {
    let split = codec.split(value)?;
    println!("Number: {}", split.number);
    println!("Suffix: {}", split.suffix);
    println!("Unit:   {}", split.unit);
    Ok(())
}

fn handle_format(codec: &Codec, magnitude: f64, unit: &str) -> Result<(), Box<dyn Error>> {
    println!("{}", codec.format_with_unit(magnitude, unit)?);
    Ok(())
}

fn handle_scale(codec: &Codec, values: &[String], unit: Option<&str>) -> Result<(), Box<dyn Error>> {
    let mut magnitudes = Vec::with_capacity(values.len());
    let mut first_unit = None;
    for value in values {
        let quantity = codec.parse(value)?;
        if first_unit.is_none() {
            first_unit = Some(quantity.unit.clone());
        }
        magnitudes.push(quantity.magnitude);
    }
    let unit = unit
        .map(str::to_string)
        .or(first_unit)
        .unwrap_or_default();

    let scale = codec.auto_scale(&magnitudes);
    println!("Suffix:     {}", scale.suffix);
    println!("Multiplier: {}", scale.multiplier);
    for magnitude in &magnitudes {
        println!("  {}", codec.render_scaled(*magnitude, &scale, &unit));
    }
    Ok(())
}

fn handle_tables(codec: &Codec, show_aliases: bool) {
    println!("SI suffixes:\n");
    for entry in codec.suffixes().entries() {
        let shown = if entry.canonical.is_empty() {
            "(none)"
        } else {
            entry.canonical.as_str()
        };
        if show_aliases {
            let aliases: Vec<String> = entry.aliases.iter().map(|c| c.to_string()).collect();
            println!("  1e{:<4} {:<7} aliases: {}", entry.exponent, shown, aliases.join(" "));
        } else {
            println!("  1e{:<4} {}", entry.exponent, shown);
        }
    }

    println!("\nUnits:\n");
    for unit in codec.units().units() {
        if show_aliases && !unit.aliases.is_empty() {
            println!("  {:<4} aliases: {}", unit.canonical, unit.aliases.join(" "));
        } else {
            println!("  {}", unit.canonical);
        }
    }
}
