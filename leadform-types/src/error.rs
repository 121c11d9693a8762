/// Error type for export targets.
///
/// These never reach the wizard's caller: the export side effect falls back
/// to an inline open and swallows the final failure.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The target cannot perform this kind of export at all.
    #[error("Export unavailable: {0}")]
    Unavailable(String),

    /// Writing the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
