use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("catalog directory not found: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("invalid locale tag: {0:?}")]
    InvalidLocale(String),
}
