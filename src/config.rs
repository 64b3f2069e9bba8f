use crate::platform::Platform;
use crate::source::nslookup::{NslookupSource, NONEXISTENT_DOMAIN, NSLOOKUP};
use crate::source::resolv_conf::{ResolvConfSource, ETC_RESOLV_CONF};
use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One address per line
    Plain,
    /// Platform and nameserver list as a YAML document
    Yaml,
}

#[derive(Parser, Clone, Debug)]
#[command(about = "Print the DNS resolvers configured on this host")]
pub struct Config {
    /// Platform identifier (linux or windows)
    #[clap(long, short = 'p', default_value = Platform::host_id(), env = "NAMESERVER_PLATFORM")]
    pub platform: String,

    /// Resolver configuration file read on linux
    #[clap(long, short = 'r', default_value = ETC_RESOLV_CONF, env = "RESOLV_CONF")]
    pub resolv_conf: String,

    /// Lookup utility run on windows
    #[clap(long, short = 'l', default_value = NSLOOKUP, env = "LOOKUP_PROGRAM")]
    pub lookup_program: String,

    /// Name queried through the lookup utility, must not resolve
    #[clap(long, short = 'q', default_value = NONEXISTENT_DOMAIN, env = "LOOKUP_QUERY")]
    pub lookup_query: String,

    /// Output format
    #[clap(long, short = 'f', value_enum, default_value_t = OutputFormat::Plain, env = "OUTPUT_FORMAT")]
    pub format: OutputFormat,
}

impl Config {
    pub fn resolv_conf_source(&self) -> ResolvConfSource {
        ResolvConfSource::new(&self.resolv_conf)
    }

    pub fn nslookup_source(&self) -> NslookupSource {
        NslookupSource::new(&self.lookup_program, &self.lookup_query)
    }
}
