mod check;
mod fmt;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use fmt::FmtCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Parse GraphQL files and report every syntax error.
    Check(Box<CheckCmd>),

    /// Print a GraphQL file in canonical form.
    Fmt(Box<FmtCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Fmt(cmd) => cmd.run(cli).await,
        }
    }
}
