// File: crates/fnchart-core/src/error.rs
// Summary: Error type shared by the adapter, configuration loading and surfaces.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// `update_chart_data` was called before `create_chart`.
    #[error("chart not initialized: call create_chart first")]
    NotInitialized,

    /// `create_chart` was called on a handle that already owns a chart.
    #[error("chart already created for this handle")]
    AlreadyCreated,

    #[error("surface error: {0}")]
    Surface(String),

    #[error("encode failed: {0}")]
    Encode(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
