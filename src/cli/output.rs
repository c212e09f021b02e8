use clap::ValueEnum;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one result per line
    #[default]
    Human,
    /// JSON documents (one object per line for scripts)
    Json,
}
