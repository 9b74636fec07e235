use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cold_hot::{api, cli, store};

#[derive(Parser)]
#[command(name = "cold-hot")]
#[command(about = "Guess the three-digit number: cold, warm, hot")]
struct Cli {
    /// Path to the SQLite database file (defaults to the platform data dir)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new game in the terminal
    New,
    /// List all saved games
    List,
    /// Replay a saved game by id
    Replay { id: i64 },
    /// Serve the REST API
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

/// Initialize tracing with output to stderr (interactive modes) or stdout.
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "cold_hot=info,tower_http=debug".into()),
    );

    if use_stderr {
        // Interactive mode: log to stderr so stdout is clean for the game UI
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn open_database(path: Option<PathBuf>) -> anyhow::Result<store::Database> {
    let db = match path {
        Some(path) => store::Database::open(path)?,
        None => store::Database::open_default()?,
    };
    db.migrate()?;
    Ok(db)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Interactive modes own stdout; keep it clean for the game text
    let use_stderr = !matches!(cli.command, Some(Commands::Serve { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve { port }) => {
            let db = open_database(cli.db)?;
            let app = api::create_router(Arc::new(db));

            let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
            tracing::info!("cold-hot server listening on http://127.0.0.1:{}", port);

            axum::serve(listener, app).await?;
        }
        Some(Commands::List) => {
            let db = open_database(cli.db)?;
            cli::run_list_games(&db)?;
        }
        Some(Commands::Replay { id }) => {
            let db = open_database(cli.db)?;
            cli::run_replay(&db, id)?;
        }
        Some(Commands::New) | None => {
            // Default: play a new game
            let db = open_database(cli.db)?;
            cli::run_new_game(&db)?;
        }
    }

    Ok(())
}
