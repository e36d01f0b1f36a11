use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::input_files;
use crate::output_utils;
use anyhow::Context;
use libgraphql_language::GraphQLSource;
use libgraphql_language::GraphQLSyntaxError;
use libgraphql_language::GraphQLSyntaxErrorKind;
use libgraphql_language::ParseOptions;
use libgraphql_language::parse;
use libgraphql_language::parse_schema;
use rayon::prelude::*;
use std::fmt::Write;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Parse every file as a schema document instead of an \
             executable document.",
        long,
    )]
    schema: bool,

    #[arg(
        help="Print diagnostics as a JSON array on stdout.",
        long,
    )]
    json: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// One syntax error, as reported by `--json`.
#[derive(Debug, serde::Serialize)]
struct Diagnostic {
    file: String,
    line: usize,
    column: usize,
    kind: GraphQLSyntaxErrorKind,
    description: String,
}

impl From<&GraphQLSyntaxError> for Diagnostic {
    fn from(error: &GraphQLSyntaxError) -> Self {
        Self {
            file: error.graphql_source().name().to_string(),
            line: error.line(),
            column: error.column(),
            kind: error.kind().clone(),
            description: error.description().to_string(),
        }
    }
}

impl CheckCmd {
    fn check_file(&self, path: &Path) -> anyhow::Result<Option<GraphQLSyntaxError>> {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let source = GraphQLSource::with_name(body, path.display().to_string());
        let options = ParseOptions::default().with_no_location(true);
        let result = if self.schema {
            parse_schema(source, options).map(drop)
        } else {
            parse(source, options).map(drop)
        };
        Ok(result.err())
    }
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let input = input_files::collect(&self.file_or_dir_paths, &self.graphql_file_exts);
        let mut io_errors = input.errors;

        let outcomes: Vec<_> = input
            .paths
            .par_iter()
            .map(|path| self.check_file(path))
            .collect();

        let mut syntax_errors = vec![];
        for outcome in outcomes {
            match outcome {
                Ok(Some(error)) => syntax_errors.push(error),
                Ok(None) => (),
                Err(e) => io_errors.push(e),
            }
        }
        log::debug!(
            "Checked {} files: {} syntax errors, {} I/O errors.",
            input.paths.len(),
            syntax_errors.len(),
            io_errors.len(),
        );

        if !io_errors.is_empty() {
            let mut report = String::new();
            for e in &io_errors {
                let _ = writeln!(report, "  * {e:#}");
            }
            return CommandResult::stderr(format_args!(
                "{} Failed to read GraphQL files:\n{}",
                output_utils::RED_X,
                report.trim_end(),
            ));
        }

        if self.json {
            let diagnostics: Vec<Diagnostic> =
                syntax_errors.iter().map(Diagnostic::from).collect();
            let result = match serde_json::to_string_pretty(&diagnostics) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Failed to serialize diagnostics: {e}",
                    output_utils::RED_X,
                )),
            };
            return if syntax_errors.is_empty() { result } else { result.failed() };
        }

        if syntax_errors.is_empty() {
            return CommandResult::stdout(format_args!(
                concat!(
                    "{} All GraphQL parsed successfully:\n",
                    "  * Checked {}.\n",
                    "  * Skipped {}.",
                ),
                output_utils::GREEN_CHECK,
                output_utils::pluralize(input.paths.len(), "file"),
                output_utils::pluralize(input.num_skipped, "non-graphql file"),
            ));
        }

        let mut report = String::new();
        for error in &syntax_errors {
            let _ = writeln!(report, "{}\n", error.message());
        }
        CommandResult::stderr(format_args!(
            "{report}{} {} in {}:\n{}",
            output_utils::RED_X,
            output_utils::pluralize(syntax_errors.len(), "syntax error"),
            output_utils::pluralize(input.paths.len(), "file"),
            syntax_errors
                .iter()
                .map(|error| format!("  * {}", error.format_oneline()))
                .collect::<Vec<_>>()
                .join("\n"),
        ))
    }
}
