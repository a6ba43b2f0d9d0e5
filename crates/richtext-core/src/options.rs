//! Configuration options for Rich Text serialization

/// Options for JSON serialization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Pretty-print JSON output (two-space indentation)
    pub pretty: bool,
}

impl Options {
    /// Options producing indented JSON
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}
