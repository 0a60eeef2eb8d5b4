pub mod generate;
pub mod holidays;
pub mod init;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Generate a timesheet for a date range")]
    Generate(generate::GenerateArgs),
    #[command(about = "List public holidays of a region")]
    Holidays(holidays::HolidaysArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Generate(args) => generate::cmd(args),
            Commands::Holidays(args) => holidays::cmd(args),
            Commands::Init(args) => init::cmd(args),
        }
    }
}
