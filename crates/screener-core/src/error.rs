use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}
