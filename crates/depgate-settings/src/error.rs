#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("root directory does not exist: {0}")]
    RootDirNotFound(String),

    #[error("read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("render config: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("unknown severity: {0} (expected info|low|medium|high|critical|all)")]
    UnknownSeverity(String),

    #[error("unknown strategy: {0} (expected npm|node|snyk|sonatype|none)")]
    UnknownStrategy(String),

    #[error("unknown warnings policy: {0} (expected error|warning|off)")]
    UnknownWarningsPolicy(String),

    #[error("unknown reporter: {0} (expected console|json|markdown)")]
    UnknownReporter(String),

    #[error("invalid ignore file: {0}")]
    InvalidIgnoreFile(String),
}
