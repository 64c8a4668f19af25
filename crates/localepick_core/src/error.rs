use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseLocaleError {
    #[error("empty locale identifier")]
    Empty,

    #[error("malformed locale identifier `{0}` (expected language[_COUNTRY][.encoding][@modifier])")]
    Malformed(String),
}
