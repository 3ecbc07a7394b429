/// Hook the retrieval engine uses to kick off one-shot background
/// ingestion when it observes an empty corpus. Implementations must be
/// idempotent per run: repeated requests while an import is underway are
/// no-ops.
pub trait IIngestTrigger: Send + Sync {
    fn request_ingest(&self);

    /// Whether an ingestion run is currently underway.
    fn ingest_in_progress(&self) -> bool;
}
