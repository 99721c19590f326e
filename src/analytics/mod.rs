//! Analytics view-model engine
//!
//! Pure, synchronous transforms from raw corpus payloads into chart-ready
//! records. [`AnalyticsFacade`] composes the leaf transforms per screen.

pub mod comparison;
pub mod cultural;
pub mod facade;
pub mod feature_projector;
pub mod grammar;
pub mod histogram;
pub mod keyword_index;
pub mod payload;
pub mod summary;
pub mod trend_pivot;

pub use comparison::{ComparisonRow, Identified, Selection, DEFAULT_SELECTION};
pub use cultural::{CategoryCards, ReferenceCard};
pub use facade::{AnalyticsFacade, ComparisonChoice, ComparisonView, KeywordView, TRACKED_DEITIES};
pub use feature_projector::{FeatureRow, FieldSpec, CASE_FIELDS, TENSE_FIELDS};
pub use grammar::{GrammarRow, VerseCard};
pub use histogram::{HistogramBin, LengthPanel};
pub use keyword_index::{KeywordPoint, KeywordState, DEFAULT_KEYWORD};
pub use summary::{ComplexityRow, HymnBar, VocabularyPoint};
pub use trend_pivot::PivotRow;
