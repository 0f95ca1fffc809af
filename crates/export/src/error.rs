use thiserror::Error;

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render template: {0}")]
    Render(#[from] askama::Error),
}
