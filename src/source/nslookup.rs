use crate::error::{DiscoveryError, Result};
use crate::source::{NameserverSource, ADDRESS_PATTERN};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use tokio::process::Command;

pub const NSLOOKUP: &str = "nslookup";
pub const NONEXISTENT_DOMAIN: &str = "nodomain";

/// Asks the lookup utility for a name that cannot resolve, so its output
/// only carries the address of the resolver it consulted.
pub struct NslookupSource {
    program: String,
    query: String,
}

impl NslookupSource {
    pub fn new(program: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            query: query.into(),
        }
    }
}

pub fn parse_nslookup(output: &str) -> Vec<String> {
    lazy_static! {
        static ref ADDRESS_REGEX: Regex =
            Regex::new(&format!("Address:.*?{}", ADDRESS_PATTERN)).unwrap();
    }
    ADDRESS_REGEX
        .captures_iter(output)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[async_trait::async_trait]
impl NameserverSource for NslookupSource {
    async fn fetch(&self) -> Result<Vec<String>> {
        let output = Command::new(&self.program)
            .arg(&self.query)
            .output()
            .await
            .map_err(|source| DiscoveryError::Launch {
                program: self.program.clone(),
                source,
            })?;
        // the query is expected to fail, so the exit status carries no signal
        debug!("{} {} exited with {}", self.program, self.query, output.status);
        let text = String::from_utf8(output.stdout)?;
        let servers = parse_nslookup(&text);
        debug!("Found {} nameserver(s) in {} output", servers.len(), self.program);
        Ok(servers)
    }
}
