use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("fragment value at `{path}` is a {incoming} but the existing value is a {existing}")]
    InvalidFragmentShape {
        path: String,
        existing: &'static str,
        incoming: &'static str,
    },

    #[error("category `{category}` has series [{found}], expected [{expected}]")]
    DatasetAlignment {
        category: String,
        expected: String,
        found: String,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
