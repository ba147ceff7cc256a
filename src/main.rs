use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use version_code::config::{self, Config};
use version_code::logging::{self, LogFormat};
use version_code::version::VersionCode;
use version_code::version::report::VersionReport;

#[derive(Parser)]
#[command(name = "version-code")]
#[command(version, about = "Convert between semantic versions and Android version codes")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/version-code/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pack a version string into a version code
    Encode {
        /// `major.minor.patch`, or `major.minor` when --patch is given
        version: String,

        #[arg(long)]
        patch: Option<u32>,

        /// Print a JSON report instead of the bare code
        #[arg(long)]
        json: bool,
    },
    /// Unpack a version code into a version name
    Decode {
        #[arg(allow_negative_numbers = true)]
        code: i32,

        #[arg(long)]
        prefix: Option<String>,

        #[arg(long)]
        suffix: Option<String>,

        /// Print a JSON report instead of the version name
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_format, cli.log_file.as_deref())?;

    let config_path = cli.config.unwrap_or_else(config::config_path);
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;

    run(cli.command, config)
}

fn run(command: Command, config: Config) -> anyhow::Result<()> {
    match command {
        Command::Encode {
            version,
            patch,
            json,
        } => {
            let parsed = match patch {
                Some(patch) => VersionCode::parse_with_patch(&version, patch),
                None => VersionCode::parse(&version),
            }?;
            debug!("Encoded '{}' as {}", version, parsed.code());

            if json {
                let report = VersionReport::new(
                    parsed,
                    config.version_name.prefix.as_deref(),
                    config.version_name.suffix.as_deref(),
                );
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", parsed.code());
            }
        }
        Command::Decode {
            code,
            prefix,
            suffix,
            json,
        } => {
            let version = VersionCode::from_code(code)?;
            debug!("Decoded {} as {}", code, version);

            let prefix = prefix.or(config.version_name.prefix);
            let suffix = suffix.or(config.version_name.suffix);

            if json {
                let report = VersionReport::new(version, prefix.as_deref(), suffix.as_deref());
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "{}",
                    version.version_name(prefix.as_deref(), suffix.as_deref())
                );
            }
        }
    }

    Ok(())
}
