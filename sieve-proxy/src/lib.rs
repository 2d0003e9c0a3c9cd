mod censor;
mod config;
mod error;
mod filter;
mod proxy;
mod reject;
mod resolve;

pub use censor::censor_body;
pub use config::{HeaderConfig, ListenConfig, ProxyConfig, ReplacementRule};
pub use error::ProxyError;
pub use filter::{forbidden_uri, is_forbidden};
pub use proxy::{Connector, DirectConnector, Proxy, UPSTREAM_PORT, handle_transaction};
pub use reject::{REJECTION_STATUS_LINE, rejection_response};
pub use resolve::{extract_host, extract_path, host_only};
