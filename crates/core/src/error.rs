#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(
        "failed to read catalog file (path: {path}): {source}",
        path = path.display()
    )]
    CatalogRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
