//! # Transcoder CLI - Charset Conversion with Alias Fallback
//!
//! Command-line interface over the transcoder chain: convert files or
//! streams between named charsets, resolve legacy alias names, and inspect
//! the available backends.

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use serde::Serialize;

#[cfg(feature = "cli")]
use transcoder::{Transcoder, aliases, create};

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI features disabled. Enable with --features cli");
    std::process::exit(1);
}

/// Transcoder: charset conversion with alias resolution and backend fallback
#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "transcoder")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert data between character encodings
    Convert(ConvertArgs),

    /// Resolve a charset alias to its canonical name, or list all aliases
    Resolve(ResolveArgs),

    /// Show the backends available to the transcoding chain
    Backends(BackendsArgs),
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct ConvertArgs {
    /// Source encoding (aliases are resolved automatically)
    #[arg(short = 'f', long = "from")]
    from: String,

    /// Target encoding
    #[arg(short = 't', long = "to", default_value = "UTF-8")]
    to: String,

    /// Input file (stdin if not specified)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct ResolveArgs {
    /// Alias to resolve (omit to list the whole table)
    name: Option<String>,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct BackendsArgs {
    /// Default output encoding the chain is built for
    #[arg(short, long, default_value = "UTF-8")]
    encoding: String,
}

#[cfg(feature = "cli")]
#[derive(Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Serialize)]
struct ConversionReport {
    from: String,
    to: String,
    bytes_in: usize,
    bytes_out: usize,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(ref args) => convert_command(args, &cli)?,
        Commands::Resolve(ref args) => resolve_command(args, &cli)?,
        Commands::Backends(ref args) => backends_command(args, &cli)?,
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn convert_command(args: &ConvertArgs, cli: &Cli) -> Result<()> {
    let chain = create(&args.to)
        .with_context(|| format!("Failed to build transcoder chain for {}", args.to))?;

    if cli.verbose {
        eprintln!(
            "Converting from {} to {} (backends: {})",
            args.from,
            args.to,
            chain.backend_names().join(", ")
        );
    }

    let input_data = if let Some(ref input_path) = args.input {
        fs::read(input_path)
            .with_context(|| format!("Failed to read input file: {}", input_path.display()))?
    } else {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    let output_data = chain
        .transcode(&input_data, &args.from, &args.to)
        .with_context(|| format!("Conversion from {} to {} failed", args.from, args.to))?;

    if let Some(ref output_path) = args.output {
        fs::write(output_path, &output_data)
            .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;
        if cli.verbose {
            eprintln!("Wrote to: {}", output_path.display());
        }
    } else {
        io::stdout()
            .write_all(&output_data)
            .context("Failed to write to stdout")?;
    }

    if let OutputFormat::Json = cli.format {
        let report = ConversionReport {
            from: args.from.clone(),
            to: args.to.clone(),
            bytes_in: input_data.len(),
            bytes_out: output_data.len(),
        };
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    } else if cli.verbose {
        eprintln!(
            "Processed {} bytes -> {} bytes",
            input_data.len(),
            output_data.len()
        );
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn resolve_command(args: &ResolveArgs, cli: &Cli) -> Result<()> {
    if let Some(ref name) = args.name {
        match aliases::lookup(name) {
            Some(canonical) => match cli.format {
                OutputFormat::Json => {
                    let entry = serde_json::json!({ "alias": name, "canonical": canonical });
                    println!("{}", serde_json::to_string_pretty(&entry)?);
                }
                OutputFormat::Text => println!("{} -> {}", name, canonical),
            },
            None => {
                // Not an error: the name may already be canonical.
                match cli.format {
                    OutputFormat::Json => {
                        let entry = serde_json::json!({ "alias": name, "canonical": null });
                        println!("{}", serde_json::to_string_pretty(&entry)?);
                    }
                    OutputFormat::Text => println!("{} (no registered alias)", name),
                }
            }
        }
        return Ok(());
    }

    match cli.format {
        OutputFormat::Json => {
            let table: Vec<_> = aliases::entries()
                .iter()
                .map(|(alias, canonical)| {
                    serde_json::json!({ "alias": alias, "canonical": canonical })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        OutputFormat::Text => {
            println!("Registered aliases ({} total):", aliases::entries().len());
            for (alias, canonical) in aliases::entries() {
                println!("{:24} -> {}", alias, canonical);
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn backends_command(args: &BackendsArgs, cli: &Cli) -> Result<()> {
    let chain = create(&args.encoding)
        .with_context(|| format!("Failed to build transcoder chain for {}", args.encoding))?;

    match cli.format {
        OutputFormat::Json => {
            let info = serde_json::json!({
                "default_encoding": chain.default_encoding(),
                "backends": chain.backend_names(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        OutputFormat::Text => {
            println!("Default encoding: {}", chain.default_encoding());
            println!("Backends (preference order):");
            for (index, name) in chain.backend_names().iter().enumerate() {
                println!("  {}. {}", index + 1, name);
            }
        }
    }

    Ok(())
}
