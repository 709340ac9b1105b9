use thiserror::Error;

pub type VizResult<T> = Result<T, VizError>;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("missing required column `{field}` for {kind} data (accepted headers: {accepted})")]
    MissingColumn {
        kind: &'static str,
        field: &'static str,
        accepted: String,
    },

    #[error("csv input error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
