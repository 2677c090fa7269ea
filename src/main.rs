use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod filters;
mod jobs;
mod pagination;
mod search;
mod search_query;
mod storage;
#[cfg(test)]
mod tests;

use config::Config;
use jobs::JobStore;
use search::SearchRequest;

/// Split a comma separated list, trimming entries and dropping empty ones.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

fn init_logging() {
    // stdout carries JSON output, keep logs on stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_jobs(data: Option<String>, config: &Config) -> anyhow::Result<JobStore> {
    match data.or_else(|| config.data_path.clone()) {
        Some(path) => {
            JobStore::load(&path).with_context(|| format!("couldnt load jobs from {path}"))
        }
        None => {
            log::info!("no dataset configured, using built-in sample jobs");
            Ok(JobStore::mock())
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let args = cli::Args::parse();

    match args.command {
        #[cfg(feature = "markdown-docs")]
        cli::Command::MarkdownDocs {} => {
            clap_markdown::print_help_markdown::<cli::Args>();
            Ok(())
        }

        cli::Command::Search {
            query,
            filters,
            page,
            page_size,
            data,
            count,
        } => {
            let config = Config::load().context("couldnt load config")?;
            let store = load_jobs(data, &config)?;
            if store.is_empty() {
                log::warn!("dataset is empty, nothing to search");
            } else {
                log::info!("searching {} jobs", store.len());
            }

            let request = SearchRequest {
                query,
                criteria: filters.into(),
                page,
                page_size: Some(config.effective_page_size(page_size)),
            };

            let now = Utc::now();

            if count {
                let found = search::search_jobs(
                    store.jobs(),
                    request.query.as_deref(),
                    &request.criteria,
                    now,
                );
                println!("{} jobs found", found.len());
                return Ok(());
            }

            let response = search::search(store.jobs(), &request, config.page_size, now);
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }

        cli::Command::Parse { query } => {
            let parsed = search_query::parse(&query);
            println!("{}", serde_json::to_string_pretty(&parsed)?);
            Ok(())
        }

        cli::Command::Synonyms { term } => {
            match term {
                Some(term) => {
                    let synonyms = search_query::synonyms_for(&term);
                    if synonyms.is_empty() {
                        println!("no synonyms for {term:?}");
                    } else {
                        println!("{}: {}", term.to_lowercase(), synonyms.join(", "));
                    }
                }
                None => {
                    for (term, synonyms) in search_query::synonym_table() {
                        println!("{term}: {}", synonyms.join(", "));
                    }
                }
            }
            Ok(())
        }
    }
}
