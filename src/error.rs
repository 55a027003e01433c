use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(
        "bar buffer for series {series_index} holds {actual} rects but {required} are required; \
         the buffer pool must be resized before this pass"
    )]
    BufferMismatch {
        series_index: usize,
        required: usize,
        actual: usize,
    },

    #[error("series contract violation: {0}")]
    ContractViolation(String),
}
