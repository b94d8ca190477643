use std::{io, path::PathBuf};

use miette::Report;

const COMMAND_CONTEXT: &str = "while evaluating relation config";
const FILE_READ_CONTEXT: &str = "while reading relation config file";
const STDIN_READ_CONTEXT: &str = "while reading relation config from stdin";
const PARSE_CONTEXT: &str = "while parsing relation config";
const RENDER_CONTEXT: &str = "while rendering snapshot";

pub(crate) type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug)]
pub(crate) enum CliError {
    MissingConfigInput,
    MalformedAssignment { argument: String },
    ReadFile { path: PathBuf, source: io::Error },
    ReadStdin(io::Error),
    ParseConfig(serde_yaml::Error),
    RenderSnapshot(serde_yaml::Error),
    Core(relpath_core::Error),
}

impl From<relpath_core::Error> for CliError {
    fn from(value: relpath_core::Error) -> Self {
        Self::Core(value)
    }
}

pub(crate) fn render_runtime_error(error: CliError) -> String {
    match error {
        CliError::MissingConfigInput => format!("[usage] {}", missing_config_message()),
        CliError::MalformedAssignment { argument } => {
            format!("[usage] expected COMPONENT=VALUE, got `{argument}`")
        }
        CliError::ReadFile { path, source } => {
            let context = format!("{FILE_READ_CONTEXT} `{}`", path.display());
            format!("[io] {}", report_with_context(source, context))
        }
        CliError::ReadStdin(source) => {
            format!("[io] {}", report_with_context(source, STDIN_READ_CONTEXT))
        }
        CliError::ParseConfig(source) => {
            format!("[config] {}", report_with_context(source, PARSE_CONTEXT))
        }
        CliError::RenderSnapshot(source) => {
            format!("[render] {}", report_with_context(source, RENDER_CONTEXT))
        }
        CliError::Core(source) => {
            let category = core_category(&source);
            format!("[{category}] {}", report_with_context(source, COMMAND_CONTEXT))
        }
    }
}

fn report_with_context<E, C>(source: E, context: C) -> Report
where
    E: std::error::Error + Send + Sync + 'static,
    C: Into<String>,
{
    let anyhow_error = anyhow::Error::new(source).context(context.into());
    miette::miette!("{anyhow_error:#}")
}

fn core_category(error: &relpath_core::Error) -> &'static str {
    match error {
        relpath_core::Error::InvalidComponentName { .. } => "component",
        relpath_core::Error::InvalidPathValue { .. }
        | relpath_core::Error::InvalidPolicyValue { .. }
        | relpath_core::Error::InvalidRelationType { .. } => "value",
        relpath_core::Error::NotAMapping { .. } | relpath_core::Error::UnknownField { .. } => {
            "schema"
        }
    }
}

fn missing_config_message() -> &'static str {
    "missing relation config: pass --file <PATH> or pipe YAML via stdin"
}
