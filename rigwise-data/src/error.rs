//! Errors raised while loading catalog data.

use camino::Utf8PathBuf;
use thiserror::Error;

use rigwise_core::ComponentError;

/// Errors returned by [`load_catalog`](crate::load_catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog file failed.
    #[error("failed to read catalog file at {path}")]
    ReadFile {
        /// Requested catalog path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The catalog document was not valid JSON for the expected layout.
    #[error("failed to parse catalog file at {path}")]
    Parse {
        /// Requested catalog path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A record survived parsing but failed component validation.
    #[error("invalid component record '{name}'")]
    InvalidComponent {
        /// Name of the offending record.
        name: String,
        /// Source error from the domain constructor.
        #[source]
        source: ComponentError,
    },
}
