//! Configuration setup command.
//!
//! Runs an interactive wizard over the stored configuration and saves the
//! result, or prints the current configuration with `--show`.

use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Command-line arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Print the current configuration instead of editing it
    #[arg(short, long)]
    show: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.show {
        println!("{}", serde_json::to_string_pretty(&Config::read()?)?);
        return Ok(());
    }

    let config = Config::init()?;
    let save = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSaveConfig.to_string())
        .default(true)
        .interact()?;

    if save {
        config.save()?;
        msg_success!(Message::ConfigSaved);
    } else {
        msg_info!(Message::ConfigNotSaved);
    }
    Ok(())
}
