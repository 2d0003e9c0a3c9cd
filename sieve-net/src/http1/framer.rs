use std::io::Read;

use super::message::{HttpMessage, ParseError};

const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

pub const DEFAULT_READ_CHUNK_SIZE: usize = 8192;

#[derive(Debug)]
pub enum ReceiveError {
    Io(std::io::Error),
    ConnectionClosed,
    Parse(ParseError),
}

impl From<std::io::Error> for ReceiveError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ParseError> for ReceiveError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

/// Reads one complete HTTP message off `conn` and returns the accumulated raw
/// bytes. Blocks until the CRLFCRLF head boundary is seen and, if the head
/// declares a `Content-Length`, until that many body bytes have arrived. A
/// message without `Content-Length` is complete at the head boundary; body
/// bytes already read alongside the head are returned as-is. No timeout is
/// applied, so a silent peer blocks the call indefinitely.
pub fn receive_message<R: Read>(
    conn: &mut R,
    read_chunk_size: usize,
) -> Result<Vec<u8>, ReceiveError> {
    let mut buffer = Vec::new();
    let mut chunk = vec![0u8; read_chunk_size.max(1)];

    let head_end = loop {
        if let Some(index) = twoway::find_bytes(&buffer, HEADER_TERMINATOR) {
            break index;
        }
        let n = conn.read(&mut chunk)?;
        if n == 0 {
            return Err(ReceiveError::ConnectionClosed);
        }
        buffer.extend_from_slice(&chunk[..n]);
    };

    let head = HttpMessage::parse(&buffer)?;
    let Some(declared) = head.content_length() else {
        return Ok(buffer);
    };

    let body_start = head_end + HEADER_TERMINATOR.len();
    while buffer.len() - body_start < declared {
        let n = conn.read(&mut chunk)?;
        if n == 0 {
            return Err(ReceiveError::ConnectionClosed);
        }
        buffer.extend_from_slice(&chunk[..n]);
    }

    Ok(buffer)
}
