use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct DepartmentCommand {
    #[command(subcommand)]
    command: DepartmentSubcommand,
}

#[derive(Debug, Subcommand)]
enum DepartmentSubcommand {
    Create(create::CreateDepartmentArgs),
}

pub(crate) async fn run(command: DepartmentCommand) -> Result<(), String> {
    match command.command {
        DepartmentSubcommand::Create(args) => create::run(args).await,
    }
}
