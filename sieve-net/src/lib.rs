mod http1;

pub use http1::{
    DEFAULT_READ_CHUNK_SIZE, Header, Headers, HttpMessage, ParseError, ParseErrorKind,
    ReceiveError, receive_message,
};
