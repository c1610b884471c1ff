//! Outranker CLI entry point.
//!
//! Computes PROMETHEE II rankings from a catalog JSON file and manages the
//! file-backed result archive.

use std::env;
use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::error;
use tracing_subscriber::EnvFilter;

use outranker::adapters::{JsonCatalogProvider, JsonFileResultArchive};
use outranker::application::{
    ArchiveRankingCommand, ArchiveRankingHandler, ComputeRankingHandler, DeleteRankingHandler,
    GetRankingHandler, ListRankingsHandler, RunCoordinator,
};
use outranker::config::{AppConfig, LogConfig};
use outranker::domain::catalog::CatalogSnapshot;
use outranker::domain::foundation::Timestamp;
use outranker::ports::CatalogProvider;

const USAGE: &str = "\
Usage: outranker <command> [args]

Commands:
  rank <catalog.json>                         Compute and print the ranking
  categories <catalog.json>                   List distinct product categories
  archive <catalog.json> <label> <created-by> Compute and archive under a run label
  list                                        List archived results
  show <label>                                Print the result archived under a label
  delete <label>                              Delete the result archived under a label
";

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    init_tracing(&config.log);

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&config, &args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_new(&log.level).unwrap_or_else(|_| EnvFilter::new("info"));
    if log.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn run(config: &AppConfig, args: &[String]) -> Result<(), Box<dyn Error>> {
    let archive = Arc::new(JsonFileResultArchive::new(config.archive.data_path()));

    match args {
        [cmd, catalog_path] if cmd == "rank" => {
            let handler = compute_handler(config, catalog_path);
            let outcome = handler.handle().await?;
            println!("{}", serde_json::to_string_pretty(&outcome.rows)?);
            Ok(())
        }
        [cmd, catalog_path] if cmd == "categories" => {
            let provider = JsonCatalogProvider::new(catalog_path);
            let records = provider.fetch().await?;
            let snapshot = CatalogSnapshot::assemble(records)?;
            for category in snapshot.categories() {
                println!("{}", category);
            }
            Ok(())
        }
        [cmd, catalog_path, label, created_by] if cmd == "archive" => {
            let outcome = compute_handler(config, catalog_path).handle().await?;
            let handler = ArchiveRankingHandler::new(archive, Arc::new(RunCoordinator::new()));
            let result = handler
                .handle(ArchiveRankingCommand {
                    run_label: label.clone(),
                    created_by: created_by.clone(),
                    created_date: Timestamp::now().to_rfc3339(),
                    rows: outcome.rows,
                })
                .await?;
            println!("Archived '{}' ({} rows)", result.run_label, result.rows.len());
            Ok(())
        }
        [cmd] if cmd == "list" => {
            let handler = ListRankingsHandler::new(archive);
            for result in handler.handle().await? {
                println!(
                    "{}  created by {} on {}  ({} rows)",
                    result.run_label,
                    result.created_by,
                    result.created_date,
                    result.rows.len()
                );
            }
            Ok(())
        }
        [cmd, label] if cmd == "show" => {
            let handler = GetRankingHandler::new(archive);
            match handler.by_label(label).await? {
                Some(result) => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                    Ok(())
                }
                None => Err(format!("No archived ranking for '{}'", label).into()),
            }
        }
        [cmd, label] if cmd == "delete" => {
            let handler = DeleteRankingHandler::new(archive);
            handler.handle(label).await?;
            println!("Deleted '{}'", label);
            Ok(())
        }
        _ => {
            eprint!("{}", USAGE);
            Err("unrecognized command".into())
        }
    }
}

fn compute_handler(config: &AppConfig, catalog_path: &str) -> ComputeRankingHandler {
    ComputeRankingHandler::new(Arc::new(JsonCatalogProvider::new(catalog_path)))
        .with_weight_sum_tolerance(config.engine.weight_sum_tolerance)
}
