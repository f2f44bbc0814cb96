use std::path::PathBuf;

/// Failure confined to one shader file. The file is left out of the header
/// and generation continues.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("error reading file: {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ShaderError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ShaderError::Unreadable { path, .. } => path,
        }
    }
}

/// Failure that aborts the whole run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to list shader directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("shaders {first} and {second} both map to identifier {identifier}")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },
    #[error("failed to write header {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
