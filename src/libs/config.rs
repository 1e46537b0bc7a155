//! Application configuration stored as JSON in the data directory.
//!
//! The only externally configured value is the list of degree programs a
//! student may be enrolled in. When no configuration file exists the
//! built-in list is used, so a fresh install works without running `init`.
//!
//! ## File Location
//!
//! `config.json` lives next to the database, see [`DataStorage`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studman::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.degree_programs.push("Robotics".to_string());
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_DEGREE_PROGRAMS: [&str; 5] = [
    "Computer Science",
    "Information Technology",
    "Software Engineering",
    "Data Science",
    "Cybersecurity",
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Programs offered in the degree selector, in display order.
    #[serde(default = "default_degree_programs")]
    pub degree_programs: Vec<String>,
}

fn default_degree_programs() -> Vec<String> {
    DEFAULT_DEGREE_PROGRAMS.iter().map(|program| program.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            degree_programs: default_degree_programs(),
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactively edits the degree program list: keep a subset of the
    /// current programs, then append new ones until an empty line is entered.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigModuleDegrees, true);

        let defaults = vec![true; current.degree_programs.len()];
        let kept = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptKeepPrograms.to_string())
            .items(&current.degree_programs)
            .defaults(&defaults)
            .interact()?;

        let mut degree_programs: Vec<String> = kept.into_iter().map(|index| current.degree_programs[index].clone()).collect();

        loop {
            let program: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptNewProgram.to_string())
                .allow_empty(true)
                .interact_text()?;
            let program = program.trim();
            if program.is_empty() {
                break;
            }
            if !degree_programs.iter().any(|existing| existing == program) {
                degree_programs.push(program.to_string());
            }
        }

        if degree_programs.is_empty() {
            msg_bail_anyhow!(Message::NoProgramsConfigured);
        }

        Ok(Config { degree_programs })
    }
}
