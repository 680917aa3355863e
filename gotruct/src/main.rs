//! @ai:module:intent CLI entry point for the converter struct generator
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on config, generate, output

use clap::{ArgAction, Parser, ValueEnum};
use gotruct::{generate, output, GeneratorConfig, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gotruct")]
#[command(author, version, about = "Generate Go converter structs from annotated type declarations")]
struct Cli {
    /// Directory containing the Go files to scan (not recursive)
    path: Option<PathBuf>,

    /// Package name of the generated file
    #[arg(long)]
    package: Option<String>,

    /// Default group key for annotations without a group clause
    #[arg(long)]
    prefix: Option<String>,

    /// Output file (defaults to stdout)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Comment placed above each generated struct
    #[arg(long)]
    comment: Option<String>,

    /// Load settings from a TOML file; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Omit the "Code generated" header line
    #[arg(long, default_value = "false")]
    no_header: bool,

    /// Print the discovered groups instead of writing the file
    #[arg(long, default_value = "false")]
    dry_run: bool,

    /// Report format
    #[arg(long, short, value_enum, default_value = "text")]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

impl Cli {
    /// @ai:intent Merge flags over the optional config file
    /// @ai:effects fs:read
    fn resolve_config(&self) -> gotruct::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(path) = &self.path {
            config.path = path.clone();
        }
        if let Some(package) = &self.package {
            config.package = package.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.default_group = prefix.clone();
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        if let Some(comment) = &self.comment {
            config.comment = Some(comment.clone());
        }
        if self.no_header {
            config.header = false;
        }

        Ok(config)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gotruct={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    if cli.dry_run {
        return match gotruct::plan(&config) {
            Ok(scan) => {
                println!("{}", output::format_scan(&scan, cli.format.into()).trim_end());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        };
    }

    match generate(&config) {
        Ok(summary) => {
            // stdout already carries the generated source in that case
            if summary.output.is_some() {
                println!(
                    "{}",
                    output::format_summary(&summary, cli.format.into()).trim_end()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
