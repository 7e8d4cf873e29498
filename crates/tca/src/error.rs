use thiserror::Error;

#[derive(Error, Debug)]
pub enum TcaError {
    #[error("Invalid filled quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Calculation error: Division by zero encountered in '{0}'")]
    DivisionByZero(String),

    #[error("Undefined value: {0}")]
    Undefined(String),
}
