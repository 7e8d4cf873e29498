use thiserror::Error;

#[derive(Error, Debug)]
pub enum VolumeError {
    #[error("Invalid window: {0}")]
    InvalidWindow(String),
}
