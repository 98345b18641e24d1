//! Command-line flags (simple, no clap dependency).

use std::path::PathBuf;

use statim_core::config::SourceConfig;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub config: Option<PathBuf>,
    pub url: Option<String>,
    pub file: Option<PathBuf>,
    pub headless: bool,
    /// Headless only: emit log records as JSON on stderr.
    pub json_logs: bool,
}

impl Options {
    /// Parse `args` as produced by `std::env::args()` (program name first).
    pub fn parse(args: &[String]) -> Self {
        let value_of = |flag: &str| {
            args.iter()
                .position(|a| a == flag)
                .and_then(|i| args.get(i + 1))
                .cloned()
        };
        Self {
            config: value_of("--config").map(PathBuf::from),
            url: value_of("--url"),
            file: value_of("--file").map(PathBuf::from),
            headless: args.iter().any(|a| a == "--headless"),
            json_logs: args.iter().any(|a| a == "--json-logs"),
        }
    }

    /// Overlay the flags on the configured source. `--url` clears a
    /// configured file so the flag actually takes effect.
    pub fn resolve_source(&self, configured: &SourceConfig) -> SourceConfig {
        let mut source = configured.clone();
        if let Some(url) = &self.url {
            source.url = url.clone();
            source.file = None;
        }
        if let Some(file) = &self.file {
            source.file = Some(file.clone());
        }
        source
    }
}
