use anyhow::{Context, Result};
use tracing::info;

use crate::{db, read::ChunkReader, schema};

pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// Parameters for one load run. Values are taken as given; bad credentials
/// or a bad table name surface as database errors.
#[derive(Debug, Clone)]
pub struct RunParams {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub db: String,
    pub table: String,
    pub year: i32,
    pub month: u32,
    pub chunk_size: usize,
}

/// Loads one monthly trip file into the destination table: drop-and-create
/// the table from the declared schema, then append every chunk in arrival
/// order. The first failure of any kind aborts the run; a partial table is
/// left as-is.
pub async fn ingest(params: &RunParams) -> Result<()> {
    let file_name = schema::trip_file_name(params.year, params.month);
    info!(file = %file_name, table = %params.table, "starting load");

    let url = db::connection_url(
        &params.user,
        &params.password,
        &params.host,
        params.port,
        &params.db,
    );
    let mut conn = db::connect(&url).await?;

    let mut reader = ChunkReader::open(&file_name, params.chunk_size)
        .with_context(|| format!("opening {}", file_name))?;

    let mut table_ready = false;
    let mut total = 0u64;
    while let Some(chunk) = reader.next_chunk()? {
        if !table_ready {
            db::create_or_replace(&mut conn, &params.table).await?;
            table_ready = true;
            info!("table created");
        }
        let inserted = db::append_chunk(&mut conn, &params.table, &chunk).await?;
        total += inserted;
        info!(inserted, total, "chunk appended");
    }

    // A header-only file still ends with an empty, correctly typed table.
    if !table_ready {
        db::create_or_replace(&mut conn, &params.table).await?;
        info!("table created");
    }

    Ok(())
}
