//! Seams between the core and its collaborators. Stores, the ingest
//! trigger, and the notification channel are all injected as trait objects;
//! no ambient global state.

pub mod ingest;
pub mod notify;
pub mod store;

pub use ingest::IIngestTrigger;
pub use notify::INotifier;
pub use store::{IInventoryStore, IRecipeStore, ISettingsStore};
