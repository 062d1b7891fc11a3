//! Pet store command-line tools.
//!
//! Provides the `petstore` binary for inspecting the API without running the
//! server. `openapi` writes the same document the server serves at
//! `/openapi.json`; `routes` prints the route table.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use petstore_server::openapi::openapi_document;
use petstore_server::routes::PET_ROUTES;

/// Pet store API tools.
#[derive(Parser)]
#[command(name = "petstore", about = "Pet store API tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Write the OpenAPI document generated from the route table.
    Openapi {
        /// Output file (default: stdout).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },
    /// List every route as `METHOD PATH operationId`.
    Routes,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Openapi { output, compact } => run_openapi(output, compact),
        Commands::Routes => {
            print!("{}", render_routes());
            0
        }
    };
    process::exit(exit_code);
}

fn run_openapi(output: Option<PathBuf>, compact: bool) -> i32 {
    let document = openapi_document(PET_ROUTES);
    let rendered = if compact {
        serde_json::to_string(&document)
    } else {
        serde_json::to_string_pretty(&document)
    };
    let json = match rendered {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: failed to serialize OpenAPI document: {}", e);
            return 1;
        }
    };

    match output {
        Some(path) => match std::fs::write(&path, format!("{json}\n")) {
            Ok(()) => {
                println!("Wrote OpenAPI document to {}", path.display());
                0
            }
            Err(e) => {
                eprintln!("Error: cannot write {}: {}", path.display(), e);
                1
            }
        },
        None => {
            println!("{json}");
            0
        }
    }
}

fn render_routes() -> String {
    let width = PET_ROUTES
        .iter()
        .map(|route| route.path.len())
        .max()
        .unwrap_or(0);
    PET_ROUTES
        .iter()
        .map(|route| {
            let marker = if route.deprecated { " (deprecated)" } else { "" };
            format!(
                "{:<6} {:<width$} {}{}\n",
                route.method.as_str(),
                route.path,
                route.operation_id,
                marker,
            )
        })
        .collect()
}
