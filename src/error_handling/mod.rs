//! Error handling.
//!
//! Error types are categorized into:
//! - **Input-fatal** (`AnalysisError`): the document cannot be analyzed at all
//! - **Transport** (`FetchError`): the page could not be fetched
//! - **Initialization** (`InitializationError`): logger or HTTP client setup failed

mod types;

// Re-export public API
pub use types::{AnalysisError, FetchError, InitializationError};
