use sieve_net::{Headers, HttpMessage};

pub const REJECTION_STATUS_LINE: &[u8] = b"HTTP/1.1 403 Forbidden";

const SERVER: &str = concat!("sieve-proxy/", env!("CARGO_PKG_VERSION"));

/// Builds the canned response sent to the client when a request is blocked.
pub fn rejection_response(page: &[u8]) -> HttpMessage {
    let mut headers = Headers::new();
    headers.insert(b"Content-Length", page.len().to_string().as_bytes());
    headers.insert(b"Content-Type", b"text/html; charset=utf-8");
    headers.insert(b"Server", SERVER.as_bytes());
    headers.insert(b"Date", http_date().as_bytes());
    headers.insert(b"Access-Control-Allow-Origin", b"*");

    HttpMessage {
        start_line: REJECTION_STATUS_LINE.to_vec(),
        headers,
        body: page.to_vec(),
    }
}

fn http_date() -> String {
    chrono::Utc::now()
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}
