//! Error types for the scenario replay binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup and replay.

/// Top-level error for the replay binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: kolkhoz_core::config::ConfigError,
    },

    /// The scenario file could not be read.
    #[error("failed to read scenario {path}: {source}")]
    ScenarioRead {
        /// Path that was requested.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The scenario file is not valid YAML for a scenario.
    #[error("failed to parse scenario YAML: {source}")]
    ScenarioParse {
        /// The underlying YAML parse error.
        #[from]
        source: serde_yml::Error,
    },

    /// The construction cycle failed.
    #[error("tick error: {source}")]
    Tick {
        /// The underlying cycle error.
        #[from]
        source: kolkhoz_core::cycle::TickError,
    },

    /// A tick plan could not be encoded.
    #[error("JSON error: {source}")]
    Json {
        /// The underlying serialization error.
        #[from]
        source: serde_json::Error,
    },

    /// Writing a tick plan to the output failed.
    #[error("output error: {source}")]
    Output {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
