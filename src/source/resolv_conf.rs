use crate::error::{DiscoveryError, Result};
use crate::source::{NameserverSource, ADDRESS_PATTERN};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::path::PathBuf;

pub const ETC_RESOLV_CONF: &str = "/etc/resolv.conf";

pub struct ResolvConfSource {
    path: PathBuf,
}

impl ResolvConfSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Extracts every `nameserver <address>` entry in the order it appears.
///
/// Matching is not anchored to line starts, so a commented-out entry is
/// still reported.
pub fn parse_resolv_conf(text: &str) -> Vec<String> {
    lazy_static! {
        static ref NAMESERVER_REGEX: Regex =
            Regex::new(&format!("nameserver {}", ADDRESS_PATTERN)).unwrap();
    }
    NAMESERVER_REGEX
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[async_trait::async_trait]
impl NameserverSource for ResolvConfSource {
    async fn fetch(&self) -> Result<Vec<String>> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DiscoveryError::Io {
                path: self.path.clone(),
                source,
            })?;
        let servers = parse_resolv_conf(&text);
        debug!("Found {} nameserver(s) in {}", servers.len(), self.path.display());
        Ok(servers)
    }
}
