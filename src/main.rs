use anyhow::Result;
use clap::Parser;
use tracing::info;

use tictactoe_rewind::{args::Args, db, logging, persistence::MemoryStore, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = logging::init(&args.log_dir)?;

    if args.memory {
        info!("Using in-memory store");
        return ui::run_ui(MemoryStore::new(), args.reset);
    }

    let pool = match &args.db {
        Some(path) => db::create_pool_at(path).await?,
        None => db::create_pool().await?,
    };

    let result = ui::run_ui(db::SqliteStore::new(pool.clone()), args.reset);
    pool.close().await;
    result
}
