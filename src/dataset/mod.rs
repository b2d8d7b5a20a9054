pub mod ingest;
pub mod row;
