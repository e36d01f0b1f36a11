use crate::Cli;
use crate::CommandResult;

/// A subcommand. Output is returned rather than printed so `main` decides
/// where it goes and which exit code to use.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
