// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! `wtrie` - command line front end for weighted tries.
//!
//! Reads tries in the text format from files, runs one operation and prints
//! the result to stdout. Logging goes to stderr.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use weighted_trie::config::{ConfigLoader, LogConfig, TrieConfig, ENV_PREFIX};
use weighted_trie::error::{report_error, AppError, AppResult, ErrorContext};
use weighted_trie::format::{TrieParser, TrieWriter};
use weighted_trie::Trie;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "wtrie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser, global = true)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Read a trie and write it back in canonical form
    Show {
        /// Trie file
        file: PathBuf,
    },

    /// List every leaf with its label path and weight
    Leaves {
        /// Trie file
        file: PathBuf,

        /// Print JSON instead of plain text
        #[clap(long)]
        json: bool,
    },

    /// Print the leaf with the greatest weight
    Max {
        /// Trie file
        file: PathBuf,
    },

    /// Descend along a label path and print the node reached
    Lookup {
        /// Trie file
        file: PathBuf,

        /// Labels from the root downwards
        labels: Vec<String>,
    },

    /// Print the union of two tries
    Union {
        /// Left operand
        left: PathBuf,

        /// Right operand
        right: PathBuf,
    },

    /// Path-compress a trie with integer labels
    Compress {
        /// Trie file
        file: PathBuf,
    },

    /// Validate the configuration file
    ValidateConfig,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// One row of `leaves --json`.
#[derive(Serialize)]
struct LeafEntry {
    path: Vec<String>,
    weight: f64,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let result = if log.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init()
    };

    result.map_err(|e| AppError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn read_file<L>(parser: &TrieParser, path: &Path) -> AppResult<Trie<L>>
where
    L: weighted_trie::data_structures::weighted_trie::Label + std::str::FromStr,
{
    let mut reader = BufReader::new(File::open(path)?);
    let trie = parser.read(&mut reader)?;
    info!(file = %path.display(), nodes = trie.len(), "Loaded trie");
    Ok(trie)
}

fn run(command: Command, config: &TrieConfig) -> AppResult<()> {
    let parser = TrieParser::with_config(config.format.clone());
    let writer = TrieWriter::with_config(config.format.clone());
    let mut stdout = io::stdout().lock();

    match command {
        Command::Show { file } => {
            let trie: Trie<String> = read_file(&parser, &file)?;
            writer.write(&mut stdout, &trie)?;
        }
        Command::Leaves { file, json } => {
            let trie: Trie<String> = read_file(&parser, &file)?;
            let entries: Vec<LeafEntry> = trie
                .leaf_paths()
                .into_iter()
                .map(|(path, weight)| LeafEntry { path, weight })
                .collect();

            if json {
                serde_json::to_writer_pretty(&mut stdout, &entries)?;
                writeln!(stdout)?;
            } else {
                for entry in entries {
                    writeln!(stdout, "{} {:?}", entry.path.join("/"), entry.weight)?;
                }
            }
        }
        Command::Max { file } => {
            let trie: Trie<String> = read_file(&parser, &file)?;
            let leaf = trie.max_leaf()?;
            writeln!(stdout, "{} {:?}", leaf.path().join("/"), leaf.weight())?;
        }
        Command::Lookup { file, labels } => {
            let trie: Trie<String> = read_file(&parser, &file)?;
            let node = trie.lookup(&labels);
            let reached = node.path();
            if reached.len() < labels.len() {
                info!(
                    requested = labels.len(),
                    reached = reached.len(),
                    "Path only partially matched"
                );
            }
            let mut text = String::new();
            writer
                .render(&mut text, node)
                .map_err(|e| AppError::Custom(format!("Failed to render node: {e}")))?;
            writeln!(stdout, "/{}: {text}", reached.join("/"))?;
        }
        Command::Union { left, right } => {
            let mut merged: Trie<String> = read_file(&parser, &left)?;
            let other: Trie<String> = read_file(&parser, &right)?;
            merged += &other;
            writer.write(&mut stdout, &merged)?;
        }
        Command::Compress { file } => {
            let mut trie: Trie<i64> = read_file(&parser, &file)?;
            trie.path_compress()?;
            writer.write(&mut stdout, &trie)?;
        }
        Command::ValidateConfig => {
            info!("Configuration validated successfully");
        }
        Command::GenConfig { output } => {
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&TrieConfig::default())
                .map_err(|e| AppError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX)
        .load()
        .context("Failed to load configuration")?;

    init_logging(&config.log)?;
    weighted_trie::init();

    if let Err(error) = run(args.command, &config) {
        report_error(&ErrorContext::new(error, "wtrie"));
        process::exit(1);
    }

    Ok(())
}
