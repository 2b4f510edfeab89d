use anyhow::Result;
use nzwalks_service::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    match config.database.clone() {
        Some(database) => {
            let pool = create_pool(&database).await?;
            run(config, PgStore::new(pool)).await
        }
        None => {
            tracing::warn!("No [database] configured, serving from the in-process store");
            run(config, MemoryStore::new()).await
        }
    }
}

async fn run<S: Store>(config: Config, store: S) -> Result<()> {
    tracing::info!(backend = store.backend(), "Store ready");

    let app = router(AppState::new(config.clone(), store));
    Server::new(config).serve(app).await?;

    Ok(())
}
