use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use anyhow::Context;
use libgraphql_language::GraphQLSource;
use libgraphql_language::ParseOptions;
use libgraphql_language::parse;
use libgraphql_language::parse_schema;
use libgraphql_language::print;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct FmtCmd {
    #[arg(
        help="Parse the file as a schema document. Implied for `.graphqls` \
             files.",
        long,
    )]
    schema: bool,

    #[arg(
        help="Path to the GraphQL file to format.",
        name="FILE",
    )]
    file_path: PathBuf,
}

impl FmtCmd {
    fn is_schema(&self) -> bool {
        self.schema
            || self.file_path.extension().is_some_and(|ext| ext == "graphqls")
    }

    fn format(&self) -> anyhow::Result<String> {
        let body = std::fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let source = GraphQLSource::with_name(body, self.file_path.display().to_string());
        let options = ParseOptions::default().with_no_source(true);
        let printed = if self.is_schema() {
            log::debug!("Formatting {:#?} as a schema document.", self.file_path);
            print(&parse_schema(source, options)?)
        } else {
            print(&parse(source, options)?)
        };
        Ok(printed)
    }
}

#[inherent::inherent]
impl RunnableCommand for FmtCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.format() {
            Ok(printed) => CommandResult::stdout(format_args!("{}", printed.trim_end())),
            Err(e) => CommandResult::stderr(format_args!("{} {e:#}", output_utils::RED_X)),
        }
    }
}
