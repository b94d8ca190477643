mod error_presentation;

use std::{
    fs,
    io::{self, IsTerminal, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use error_presentation::{CliError, CliResult, render_runtime_error};
use indexmap::IndexMap;
use relpath_core::{ComponentName, Error, Mapping, Record, RelationConfig, Value};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "RELPATH_LOG";

#[derive(Debug, Parser)]
#[command(name = "relpath", version, about = "Inspect and evolve relation path configs")]
struct Cli {
    /// Relation config YAML file; stdin is read when omitted.
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the canonical snapshot of the config.
    Snapshot {
        /// Leave out parts and flags still at their defaults.
        #[arg(long)]
        omit_defaults: bool,
    },
    /// Replace path parts and quoting flags, then print the snapshot.
    Replace {
        #[arg(long = "part", value_name = "COMPONENT=VALUE")]
        parts: Vec<String>,
        #[arg(long = "quote", value_name = "COMPONENT=BOOL")]
        quotes: Vec<String>,
    },
    /// Print a single path part, or an empty line when it is unset.
    Part {
        component: String,
        #[arg(long)]
        lower: bool,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", render_runtime_error(error));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn run(cli: Cli) -> CliResult<String> {
    let config = load_config(cli.file.as_deref())?;

    match cli.command {
        Command::Snapshot { omit_defaults } => render_snapshot(&config, omit_defaults),
        Command::Replace { parts, quotes } => {
            let parts = parse_assignments(&parts, |_, raw| Ok(raw.to_string()))?;
            let quotes = parse_assignments(&quotes, parse_flag)?;
            tracing::debug!(parts = parts.len(), quotes = quotes.len(), "replacing parts");

            let replaced = RelationConfig {
                path: config.path.replace_parts(&parts)?,
                quoting: config.quoting.replace_parts(&quotes)?,
                ..config
            };
            render_snapshot(&replaced, false)
        }
        Command::Part { component, lower } => {
            let component: ComponentName = component.parse()?;
            let part = if lower {
                config.path.get_lowered_part(component)
            } else {
                config.path.get_part(component).map(str::to_string)
            };
            Ok(format!("{}\n", part.unwrap_or_default()))
        }
    }
}

fn load_config(file: Option<&Path>) -> CliResult<RelationConfig> {
    let yaml = match file {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?,
        None => read_stdin()?,
    };

    serde_yaml::from_str(&yaml).map_err(CliError::ParseConfig)
}

fn read_stdin() -> CliResult<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::MissingConfigInput);
    }

    let mut yaml = String::new();
    stdin
        .read_to_string(&mut yaml)
        .map_err(CliError::ReadStdin)?;
    Ok(yaml)
}

fn parse_assignments<V>(
    arguments: &[String],
    convert: impl Fn(ComponentName, &str) -> CliResult<V>,
) -> CliResult<IndexMap<ComponentName, V>> {
    arguments
        .iter()
        .map(|argument| -> CliResult<(ComponentName, V)> {
            let (key, raw) =
                argument
                    .split_once('=')
                    .ok_or_else(|| CliError::MalformedAssignment {
                        argument: argument.clone(),
                    })?;
            let component: ComponentName = key.parse()?;
            Ok((component, convert(component, raw)?))
        })
        .collect()
}

fn parse_flag(component: ComponentName, raw: &str) -> CliResult<bool> {
    raw.parse().map_err(|_| {
        CliError::Core(Error::InvalidPolicyValue {
            component,
            value: Value::from(raw),
        })
    })
}

fn render_snapshot(config: &RelationConfig, omit_defaults: bool) -> CliResult<String> {
    let mut snapshot = Mapping::new();
    snapshot.insert(
        "path".to_string(),
        Value::Mapping(config.path.to_plain_mapping(omit_defaults)),
    );
    snapshot.insert(
        "quoting".to_string(),
        Value::Mapping(config.quoting.to_plain_mapping(omit_defaults)),
    );
    if let Some(relation_type) = config.relation_type {
        snapshot.insert(
            "relation_type".to_string(),
            Value::from(relation_type.as_str()),
        );
    }

    serde_yaml::to_string(&Value::Mapping(snapshot)).map_err(CliError::RenderSnapshot)
}
