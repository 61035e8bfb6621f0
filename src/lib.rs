pub mod db;
pub mod ingest;
pub mod read;
pub mod schema;
