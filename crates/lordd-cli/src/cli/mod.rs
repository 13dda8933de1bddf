//! CLI for lordd.

mod commands;
mod progress;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lordd_core::config;
use std::path::PathBuf;

use commands::{run_cards, run_fetch};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "lordd")]
#[command(about = "lordd: fetch and inspect Legends of Runeterra set data", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download set archives and expand them into the output folder.
    Fetch {
        /// Folder for archives and expanded sets (default from config, "./sets").
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Set number to fetch; repeat for several. Default: the sets listed in config.
        #[arg(long = "set", value_name = "N")]
        sets: Vec<u32>,
    },

    /// Print raw and normalized cards from a set's card JSON.
    Cards {
        /// Card JSON file. Default: the expanded file of `--set` under the output folder.
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,
        /// Set whose card file is read when `--path` is not given.
        #[arg(long, default_value = "1", value_name = "N")]
        set: u32,
        /// Number of raw records to print field by field.
        #[arg(long, default_value = "10", value_name = "N")]
        preview: usize,
        /// Print the normalized list as pretty JSON instead of debug form.
        #[arg(long)]
        json: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { output_dir, sets } => {
                let folder = output_dir.unwrap_or_else(|| cfg.output_dir.clone());
                run_fetch(&cfg, &folder, &sets)?;
            }
            CliCommand::Cards {
                path,
                set,
                preview,
                json,
            } => {
                let path = path.unwrap_or_else(|| cfg.card_data_path(set));
                run_cards(&path, preview, json)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
