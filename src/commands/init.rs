//! Degree program configuration command.
//!
//! Walks the user through editing the list of degree programs offered
//! when adding or updating a student, then saves it to `config.json`.

use crate::{
    libs::{config::{Config, CONFIG_FILE_NAME}, data_storage::DataStorage, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the configuration file and fall back to the built-in program list
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
