//! RetrievalEngine — pantry terms in, enriched candidate recipes out.

use std::sync::Arc;

use larder_core::errors::LarderResult;
use larder_core::models::{CorpusStatus, EnrichedRecipe};
use larder_core::traits::{IIngestTrigger, IRecipeStore};

use crate::query::build_match_expression;

/// Retrieval over the recipe corpus.
///
/// Never blocks on ingestion: an empty corpus fires the ingest trigger
/// and returns empty for the current call, and callers poll [`status`]
/// to distinguish "nothing matched" from "corpus not ready yet".
///
/// [`status`]: RetrievalEngine::status
pub struct RetrievalEngine {
    store: Arc<dyn IRecipeStore>,
    ingest: Arc<dyn IIngestTrigger>,
    limit: usize,
}

impl RetrievalEngine {
    pub fn new(store: Arc<dyn IRecipeStore>, ingest: Arc<dyn IIngestTrigger>, limit: usize) -> Self {
        Self {
            store,
            ingest,
            limit,
        }
    }

    /// Corpus readiness for callers that want to poll instead of
    /// inferring state from empty results.
    pub fn status(&self) -> LarderResult<CorpusStatus> {
        if self.store.count()? > 0 {
            Ok(CorpusStatus::Ready)
        } else if self.ingest.ingest_in_progress() {
            Ok(CorpusStatus::Importing)
        } else {
            Ok(CorpusStatus::Empty)
        }
    }

    /// Retrieve candidate recipes for the given lowercase pantry terms,
    /// enriched with inferred metadata.
    ///
    /// An empty or unusable term list never touches the store. An empty
    /// corpus requests ingestion and returns empty.
    pub fn retrieve(&self, pantry_terms: &[String]) -> LarderResult<Vec<EnrichedRecipe>> {
        let Some(match_expr) = build_match_expression(pantry_terms) else {
            return Ok(Vec::new());
        };

        if self.store.count()? == 0 {
            tracing::info!("corpus empty, requesting ingestion");
            self.ingest.request_ingest();
            return Ok(Vec::new());
        }

        let hits = self.store.search(&match_expr, self.limit)?;
        tracing::debug!(hits = hits.len(), limit = self.limit, "corpus retrieval");
        Ok(hits.into_iter().map(larder_enrich::enrich).collect())
    }
}
