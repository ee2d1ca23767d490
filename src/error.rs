use std::path::PathBuf;

use thiserror::Error;

/// Errors the scaffolder distinguishes at the top level.
///
/// `FileExists` is the only recoverable kind: the binary reports it and ends
/// the run. Everything else propagates and terminates with a non-zero status.
#[derive(Debug, Error)]
pub enum Error {
    #[error("File exists [{}]. Use -f option to overwrite", .path.display())]
    FileExists { path: PathBuf },

    #[error("template `{file}` references unknown field `{field}`")]
    UnknownField { file: String, field: String },
}
