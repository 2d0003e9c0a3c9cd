mod framer;
mod message;

pub use framer::{DEFAULT_READ_CHUNK_SIZE, ReceiveError, receive_message};
pub use message::{Header, Headers, HttpMessage, ParseError, ParseErrorKind};
