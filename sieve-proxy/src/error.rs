use sieve_net::{ParseError, ReceiveError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("proxy configuration error: {0}")]
    Config(String),
    #[error("failed to receive a complete message: {0:?}")]
    Receive(ReceiveError),
    #[error("malformed http message: {0:?}")]
    Parse(ParseError),
    #[error("request has no Host header")]
    MissingHost,
    #[error("Host header is not valid utf-8")]
    InvalidHost,
    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),
    #[error("proxy IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ReceiveError> for ProxyError {
    fn from(err: ReceiveError) -> Self {
        Self::Receive(err)
    }
}

impl From<ParseError> for ProxyError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}
