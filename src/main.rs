// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use sift::{explain, load_catalog, normalize_and_tokenize, to_json, write_results, Item, ScoredItem};

mod cli;
use cli::display::{render_table, use_colors};
use cli::{Cli, Commands, OutputFormat};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            query,
            catalog,
            output,
            limit,
            format,
            sequential,
        } => run_search(
            &query,
            &catalog,
            output.as_deref(),
            limit,
            format.unwrap_or_else(OutputFormat::detect),
            sequential,
        ),
        Commands::Explain { query, id, catalog } => run_explain(&query, &id, &catalog),
        Commands::Tokenize { text } => run_tokenize(&text),
    };

    if let Err(e) = outcome {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "parallel")]
fn rank_catalog<'a>(catalog: &'a [Item], query: &str, sequential: bool) -> Vec<ScoredItem<'a>> {
    if sequential {
        sift::rank(catalog, query)
    } else {
        sift::rank_parallel(catalog, query)
    }
}

#[cfg(not(feature = "parallel"))]
fn rank_catalog<'a>(catalog: &'a [Item], query: &str, _sequential: bool) -> Vec<ScoredItem<'a>> {
    sift::rank(catalog, query)
}

fn run_search(
    query: &str,
    catalog_path: &str,
    output: Option<&str>,
    limit: usize,
    format: OutputFormat,
    sequential: bool,
) -> Result<()> {
    let catalog = load_catalog(catalog_path).context("could not load catalog")?;
    info!("searching {} items for {:?}", catalog.len(), query);

    let mut results = rank_catalog(&catalog, query, sequential);
    if limit > 0 {
        results.truncate(limit);
    }
    debug!("{} results after limit", results.len());

    if let Some(path) = output {
        write_results(path, &results).context("could not save results")?;
        info!("wrote {} results to {}", results.len(), path);
    }

    let rendered = match format {
        OutputFormat::Json => to_json(&results, false)? + "\n",
        OutputFormat::Pretty => to_json(&results, true)? + "\n",
        OutputFormat::Table => render_table(&results, use_colors()),
    };

    std::io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("could not write to stdout")?;
    Ok(())
}

fn run_explain(query: &str, id: &str, catalog_path: &str) -> Result<()> {
    let catalog = load_catalog(catalog_path).context("could not load catalog")?;
    let item = catalog
        .iter()
        .find(|item| item.id == id)
        .with_context(|| format!("no item with id {:?} in {}", id, catalog_path))?;

    let contributions = explain(item, query);
    let mut out = std::io::stdout().lock();
    for c in &contributions {
        writeln!(
            out,
            "{:<11} {:>3}  {:?} ~ {:?} ({})",
            c.field.as_str(),
            c.weight,
            c.query_token,
            c.field_token,
            match c.kind {
                sift::MatchKind::Exact => "exact",
                sift::MatchKind::Contains => "field contains query",
                sift::MatchKind::Contained => "query contains field",
            }
        )?;
    }
    let total = contributions
        .iter()
        .fold(0u64, |acc, c| acc.saturating_add(u64::from(c.weight)));
    writeln!(out, "relevance {}", total)?;
    Ok(())
}

fn run_tokenize(text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for token in normalize_and_tokenize(text) {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}
