use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Input is neither a flat point array nor a series array.
    #[error("unrecognized chart data format: {0}")]
    DataFormat(String),

    /// Zero categories, zero extent or zero scale maximum.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}
