//! Dataset ingestion: line-delimited JSON, plain or gzipped, into the
//! recipe corpus.
//!
//! Only stream-level I/O aborts a run. Malformed lines and records with a
//! blank name are skipped and counted. Ingredients are trimmed and
//! lowercased at this boundary so every downstream consumer sees
//! normalized terms; steps are kept verbatim.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek};
use std::path::Path;

use flate2::read::GzDecoder;
use serde::Deserialize;

use larder_core::config::IngestConfig;
use larder_core::errors::{IngestError, LarderResult};
use larder_core::models::RecipeRecord;
use larder_core::traits::{IRecipeStore, ISettingsStore};

/// Settings flag set once the bundled dataset has been imported.
pub const RECIPES_IMPORTED_KEY: &str = "recipes_imported";

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// One dataset line. Missing fields default to empty rather than failing
/// the line, so partial records still count as malformed only when the
/// name ends up blank.
#[derive(Debug, Deserialize)]
struct RawRecipe {
    #[serde(default)]
    name: String,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    steps: Vec<String>,
}

/// Outcome of one ingestion run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    /// Records written to the corpus.
    pub imported: usize,
    /// Lines dropped as malformed or nameless.
    pub skipped: usize,
}

/// Open the dataset, sniffing the gzip magic bytes to pick a decoder.
fn open_dataset(path: &Path) -> Result<Box<dyn BufRead>, IngestError> {
    if !path.is_file() {
        return Err(IngestError::DatasetMissing {
            path: path.display().to_string(),
        });
    }

    let mut file = File::open(path)?;
    let mut magic = [0u8; 2];
    let read = file.read(&mut magic)?;
    file.rewind()?;

    if read == 2 && magic == GZIP_MAGIC {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Ingest the configured dataset into the corpus.
///
/// Records are written in batches of `config.batch_size`; `progress` is
/// invoked after each batch with the cumulative import count. The
/// imported flag is set only after the final batch commits, so an
/// interrupted run re-ingests from scratch on the next trigger.
pub fn ingest_dataset(
    store: &dyn IRecipeStore,
    settings: &dyn ISettingsStore,
    config: &IngestConfig,
    mut progress: impl FnMut(usize),
) -> LarderResult<IngestReport> {
    let reader = open_dataset(Path::new(&config.dataset_path))?;
    let batch_size = config.batch_size.max(1);

    let mut report = IngestReport::default();
    let mut batch: Vec<RecipeRecord> = Vec::with_capacity(batch_size);

    for line in reader.lines() {
        let line = line.map_err(IngestError::Io)?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<RawRecipe>(line) {
            Ok(raw) if !raw.name.trim().is_empty() => {
                let ingredients = raw
                    .ingredients
                    .iter()
                    .map(|i| i.trim().to_lowercase())
                    .filter(|i| !i.is_empty())
                    .collect();
                batch.push(RecipeRecord::new(raw.name.trim(), ingredients, raw.steps));
            }
            Ok(_) => report.skipped += 1,
            Err(e) => {
                report.skipped += 1;
                tracing::debug!(error = %e, "skipping malformed dataset line");
            }
        }

        if batch.len() >= batch_size {
            report.imported += store.insert_bulk(&batch)?;
            batch.clear();
            progress(report.imported);
        }
    }

    if !batch.is_empty() {
        report.imported += store.insert_bulk(&batch)?;
        progress(report.imported);
    }

    settings.set_bool(RECIPES_IMPORTED_KEY, true)?;
    tracing::info!(
        imported = report.imported,
        skipped = report.skipped,
        "dataset ingestion complete"
    );
    Ok(report)
}

/// Ingest only when the corpus needs it.
///
/// An empty corpus with the imported flag still set means the database
/// was cleared out from under us; the flag is reset and ingestion runs
/// again. Returns `None` when the corpus is already populated.
pub fn ingest_if_needed(
    store: &dyn IRecipeStore,
    settings: &dyn ISettingsStore,
    config: &IngestConfig,
    progress: impl FnMut(usize),
) -> LarderResult<Option<IngestReport>> {
    let count = store.count()?;

    if count == 0 && settings.get_bool(RECIPES_IMPORTED_KEY)? {
        tracing::warn!("corpus empty but imported flag set, resetting flag");
        settings.set_bool(RECIPES_IMPORTED_KEY, false)?;
    }

    if count > 0 && settings.get_bool(RECIPES_IMPORTED_KEY)? {
        return Ok(None);
    }

    ingest_dataset(store, settings, config, progress).map(Some)
}
