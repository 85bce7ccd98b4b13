/// How much the binaries log. Maps onto the maximum [`tracing::Level`] passed
/// to the subscriber.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum Verbosity {
    /// Errors only
    Silent,
    /// Search start and end, final statistics
    #[default]
    Normal,
    /// Map construction and limit checks
    Verbose,
    /// Every expansion
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
