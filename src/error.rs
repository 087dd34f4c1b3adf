//! Error types for the landing page
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// A style key that has no entry in its style table
    #[snafu(display("Unknown {kind} style key `{key}`"))]
    UnknownStyleKey { kind: &'static str, key: String },

    /// An icon name with no embedded SVG
    #[snafu(display("Unknown icon `{name}`"))]
    UnknownIcon { name: String },

    /// A link target that no section declares
    #[snafu(display("Unknown anchor `#{anchor}`"))]
    UnknownAnchor { anchor: String },

    /// Two sections declaring the same anchor id
    #[snafu(display("Duplicate section id `{id}`"))]
    DuplicateSection { id: String },

    /// Unknown page variant name
    #[snafu(display("Unknown page variant `{name}`"))]
    UnknownVariant { name: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
