use std::collections::HashSet;

/// The blocklist key for a request: Host header bytes concatenated with the
/// path, verbatim, no separator or normalization.
pub fn forbidden_uri(host: &[u8], path: &[u8]) -> Vec<u8> {
    let mut uri = Vec::with_capacity(host.len() + path.len());
    uri.extend_from_slice(host);
    uri.extend_from_slice(path);
    uri
}

pub fn is_forbidden(blocked: &HashSet<String>, host: &[u8], path: &[u8]) -> bool {
    let uri = forbidden_uri(host, path);
    match std::str::from_utf8(&uri) {
        Ok(uri) => blocked.contains(uri),
        Err(_) => false,
    }
}
