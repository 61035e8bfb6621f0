use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use tripload::ingest::{ingest, RunParams, DEFAULT_CHUNK_SIZE};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) run parameters ───────────────────────────────────────────
    // Fixed for now; edit here to point at another file or database.
    let params = RunParams {
        user: "root".into(),
        password: "root".into(),
        host: "localhost".into(),
        port: 9868,
        db: "ny_taxi".into(),
        table: "yellow_taxi_data".into(),
        year: 2021,
        month: 1,
        chunk_size: DEFAULT_CHUNK_SIZE,
    };

    // ─── 3) load the file ────────────────────────────────────────────
    ingest(&params).await?;

    info!("all done");
    Ok(())
}
