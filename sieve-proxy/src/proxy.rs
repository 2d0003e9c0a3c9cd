use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};

use tracing::{debug, info};

use sieve_net::{HttpMessage, receive_message};

use crate::censor::censor_body;
use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::filter::is_forbidden;
use crate::reject::rejection_response;
use crate::resolve::{extract_host, extract_path, host_only};

/// Upstream connections are always plain text on port 80.
pub const UPSTREAM_PORT: u16 = 80;

pub trait Connector {
    type Stream: Read + Write;

    fn connect(&mut self, host: &str, port: u16) -> std::io::Result<Self::Stream>;
}

pub struct DirectConnector;

impl Connector for DirectConnector {
    type Stream = TcpStream;

    fn connect(&mut self, host: &str, port: u16) -> std::io::Result<TcpStream> {
        TcpStream::connect((host, port))
    }
}

pub struct Proxy {
    config: ProxyConfig,
    error_page: Vec<u8>,
}

impl Proxy {
    pub fn new(config: ProxyConfig) -> Result<Self, ProxyError> {
        let error_page = std::fs::read(&config.error_page).map_err(|err| {
            ProxyError::Config(format!(
                "cannot read error page {}: {err}",
                config.error_page
            ))
        })?;
        Ok(Self { config, error_page })
    }

    /// Accepts exactly one client connection and mediates one transaction,
    /// then returns. Reads and writes block without timeout.
    pub fn run(&self) -> Result<(), ProxyError> {
        let addr = format!("{}:{}", self.config.listen.host, self.config.listen.port);
        let listener = TcpListener::bind(&addr)?;
        info!(%addr, "listening for one client connection");

        let (mut client, peer) = listener.accept()?;
        info!(%peer, "client connected");
        drop(listener);

        handle_transaction(
            &self.config,
            &self.error_page,
            &mut client,
            &mut DirectConnector,
        )
    }
}

/// One proxy transaction: receive and parse the client request, reject it
/// with the canned 403 if its URI is blocked, otherwise forward it upstream
/// with the configured header injected, then censor the response body, fix up
/// `Content-Length`, and relay. Any error aborts the transaction; both
/// streams close on drop.
pub fn handle_transaction<C, U>(
    config: &ProxyConfig,
    error_page: &[u8],
    client: &mut C,
    connector: &mut U,
) -> Result<(), ProxyError>
where
    C: Read + Write,
    U: Connector,
{
    let raw = receive_message(client, config.read_chunk_size)?;
    let mut request = HttpMessage::parse(&raw)?;

    let host = extract_host(&request)?.to_vec();
    let path = extract_path(&request)?;
    debug!(host = %String::from_utf8_lossy(&host), %path, "request received");

    if is_forbidden(&config.blocked, &host, path.as_bytes()) {
        info!(%path, "request blocked");
        let rejection = rejection_response(error_page);
        client.write_all(&rejection.serialize())?;
        client.flush()?;
        return Ok(());
    }

    request
        .headers
        .insert(config.inject.name.as_bytes(), config.inject.value.as_bytes());

    let host = std::str::from_utf8(&host).map_err(|_| ProxyError::InvalidHost)?;
    let mut upstream = connector.connect(host_only(host), UPSTREAM_PORT)?;
    upstream.write_all(&request.serialize())?;
    upstream.flush()?;
    debug!(host, "request forwarded upstream");

    let raw = receive_message(&mut upstream, config.read_chunk_size)?;
    let mut response = HttpMessage::parse(&raw)?;

    response.body = censor_body(&response.body, &config.replacements);
    let length = response.body.len();
    response.set_content_length(length);

    client.write_all(&response.serialize())?;
    client.flush()?;
    info!(length, "response relayed");
    Ok(())
}
