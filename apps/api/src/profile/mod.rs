// User profile: base resume storage, lock toggling, upload ingestion.

pub mod handlers;
pub mod ingest;
pub mod store;
