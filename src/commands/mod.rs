pub mod view;

// Re-export command functions for convenience
pub use view::{
    complexity, compare, cultural, deities, grammar, hymns, keywords, lengths, verses,
    vocabulary, ViewContext,
};
