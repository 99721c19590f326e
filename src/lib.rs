//! samhita - analytics view-models for a hymn corpus
//!
//! Turns raw corpus payloads (group summaries, hymn lists, verse grammar,
//! deity/keyword/feature trends) into the flat, ordered records that chart
//! and comparison widgets consume.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`analytics`] - Pure view-model transforms and the per-screen facade
//! - [`models`] - Corpus records and trend maps
//! - [`source`] - Fetching payloads from files or the corpus service
//! - [`config`] - Configuration management and settings
//! - [`error`] - Unified error handling
//! - [`utils`] - Common utilities and helpers
//!
//! # Example
//!
//! ```no_run
//! use samhita::analytics::AnalyticsFacade;
//! use samhita::source::{CorpusSource, Dataset, FileSource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let source = FileSource::new("data");
//!     let raw = source.fetch(&Dataset::DeityTrends).await?;
//!     let rows = AnalyticsFacade::new().deity_prominence(&raw);
//!     println!("{}", serde_json::to_string_pretty(&rows)?);
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod config;
pub mod error;
pub mod models;
pub mod source;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analytics::{AnalyticsFacade, KeywordState, Selection};
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, Result, SamhitaErrorTrait};
    pub use crate::models::{Group, GroupId, Hymn, Verse, GROUP_COUNT};
    pub use crate::source::{CorpusSource, Dataset, FileSource, HttpSource};
}

// Direct re-exports for convenience
pub use analytics::AnalyticsFacade;
pub use models::{GroupId, GROUP_COUNT};
