use crate::error::Result;

pub mod nslookup;
pub mod resolv_conf;

/// Address token shared by every source: an IPv4 dotted quad, or uppercase
/// alphanumerics and colons.
pub(crate) const ADDRESS_PATTERN: &str = r"([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+|[A-Z0-9:]+)";

#[async_trait::async_trait]
pub trait NameserverSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<String>>;
}
