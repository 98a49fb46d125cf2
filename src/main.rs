//! routebind: compile route tables and match paths against them.
//!
//! ```text
//!   routes.toml ──▶ config (parse, validate) ──▶ routing (compile) ──▶ Router
//!                                                                       │
//!   path ─────────────────────────────────────────────▶ Router::find ◀──┘
//!                                                           │
//!                                            target + bound parameters
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use routebind::config::loader::load_config;
use routebind::config::watcher::RouteTableWatcher;
use routebind::lifecycle::shutdown_signal;
use routebind::observability::logging::init_logging;
use routebind::routing::{RouteMatch, Router, SharedRouter};

#[derive(Parser)]
#[command(name = "routebind")]
#[command(about = "Compile URI templates and match request paths against them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a route table and report the first fatal error
    Check { table: PathBuf },
    /// Match paths against a route table
    Match {
        table: PathBuf,
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Build the path of a named route from positional values
    Url {
        table: PathBuf,
        name: String,
        values: Vec<String>,
    },
    /// Match paths read from stdin, reloading the table when the file changes
    Watch { table: PathBuf },
}

impl Commands {
    fn table(&self) -> &Path {
        match self {
            Commands::Check { table }
            | Commands::Match { table, .. }
            | Commands::Url { table, .. }
            | Commands::Watch { table } => table,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let table = cli.command.table().to_path_buf();
    let config = load_config(&table)?;
    init_logging(&config.observability)?;

    tracing::info!(table = %table.display(), "routebind v0.1.0 starting");

    // Every template compiles here, before any path is matched.
    let router = Router::from_config(&config)?;

    match cli.command {
        Commands::Check { .. } => {
            println!("{}: {} route(s) OK", table.display(), router.route_count());
        }
        Commands::Match { paths, .. } => {
            for path in &paths {
                print_match(path, router.find(path));
            }
        }
        Commands::Url { name, values, .. } => {
            println!("{}", router.url(&name, &values)?);
        }
        Commands::Watch { .. } => watch(&table, router).await?,
    }
    Ok(())
}

fn print_match(path: &str, found: Option<RouteMatch<'_>>) {
    let line = match found {
        Some(m) => serde_json::json!({
            "path": path,
            "matched": true,
            "target": m.route.target(),
            "name": m.route.name(),
            "params": m.params,
        }),
        None => serde_json::json!({ "path": path, "matched": false }),
    };
    println!("{}", line);
}

async fn watch(table: &Path, router: Router) -> Result<(), Box<dyn std::error::Error>> {
    let shared = Arc::new(SharedRouter::new(router));

    let (watcher, mut updates) = RouteTableWatcher::new(table);
    let _watcher = watcher.run()?;

    let updater = {
        let shared = shared.clone();
        tokio::spawn(async move {
            while let Some(router) = updates.recv().await {
                shared.replace(router);
            }
        })
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let path = line.trim();
                if !path.is_empty() {
                    let current = shared.snapshot();
                    print_match(path, current.find(path));
                }
            }
            _ = &mut shutdown => break,
        }
    }

    updater.abort();
    tracing::info!("Shutdown complete");
    Ok(())
}
