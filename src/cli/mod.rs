// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sift command-line interface.
//!
//! Three subcommands: `search` ranks a JSON catalog against a query,
//! `explain` shows where one item's relevance comes from, and `tokenize`
//! prints what the normalizer makes of a string.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "sift",
    about = "Rank a JSON catalog of items against a free-text query",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog and print ranked results
    Search {
        /// Search query
        query: String,

        /// JSON file holding an array of items
        #[arg(short, long, default_value = "data.json")]
        catalog: String,

        /// Also write the results as JSON to this file
        #[arg(short, long)]
        output: Option<String>,

        /// Maximum number of results to print (0 = all)
        #[arg(short, long, default_value = "0")]
        limit: usize,

        /// Output format (defaults to table on a terminal, json otherwise)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Score items on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Show every token pair that contributes to an item's relevance
    Explain {
        /// Search query
        query: String,

        /// Id of the item to explain
        id: String,

        /// JSON file holding an array of items
        #[arg(short, long, default_value = "data.json")]
        catalog: String,
    },

    /// Print the normalized tokens of a piece of text, one per line
    Tokenize {
        /// Text to normalize
        text: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON array
    Json,
    /// Indented JSON array
    Pretty,
    /// Aligned text table
    Table,
}

impl OutputFormat {
    /// Table for humans, JSON for pipes.
    pub fn detect() -> Self {
        if atty::is(atty::Stream::Stdout) {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    }
}
