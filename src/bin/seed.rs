use lanchonete_orders::{config::AppConfig, seed, snapshot::SnapshotStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let snapshots = SnapshotStore::new(&config.store_dir);
    let state = seed::initial_state();
    snapshots.save(&state).await?;

    println!(
        "Seed completed: {} products, {} extras written to {}",
        state.produtos.len(),
        state.extras.len(),
        snapshots.path().display()
    );
    Ok(())
}
