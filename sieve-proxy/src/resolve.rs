use sieve_net::HttpMessage;

use crate::error::ProxyError;

pub fn extract_host(request: &HttpMessage) -> Result<&[u8], ProxyError> {
    request.headers.get(b"Host").ok_or(ProxyError::MissingHost)
}

/// Path component of the request target: second whitespace-separated field of
/// the start line, with any query or fragment dropped.
pub fn extract_path(request: &HttpMessage) -> Result<String, ProxyError> {
    let line = std::str::from_utf8(&request.start_line).map_err(|_| {
        ProxyError::MalformedRequestLine(String::from_utf8_lossy(&request.start_line).into_owned())
    })?;
    let mut fields = line.split_whitespace();
    let target = fields
        .next()
        .and_then(|_method| fields.next())
        .ok_or_else(|| ProxyError::MalformedRequestLine(line.to_string()))?;
    Ok(target_path(target))
}

fn target_path(target: &str) -> String {
    if target.starts_with("http://") || target.starts_with("https://") {
        if let Ok(url) = url::Url::parse(target) {
            return url.path().to_string();
        }
    }
    let path = target.split(['?', '#']).next().unwrap_or(target);
    path.to_string()
}

/// Strips a `:port` suffix from a Host value. The blocklist compares the Host
/// verbatim; only the upstream connect uses the stripped form.
pub fn host_only(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}
