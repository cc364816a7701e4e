use clap::{Parser, Subcommand};

mod db;
mod department;

#[derive(Debug, Parser)]
#[command(name = "personnel-app", about = "Personnel administration CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Department(department::DepartmentCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Department(command) => department::run(command).await,
        }
    }
}
