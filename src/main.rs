use crate::config::{Config, OutputFormat};
use crate::discovery::get_nameservers;
use clap::Parser;
use log::error;
use serde::Serialize;
use std::process::ExitCode;

mod config;
mod discovery;
mod error;
mod platform;
mod source;

#[derive(Serialize, Debug)]
struct Report<'a> {
    platform: &'a str,
    nameservers: &'a [String],
}

fn render(config: &Config, nameservers: &[String]) -> Result<String, serde_yaml::Error> {
    match config.format {
        OutputFormat::Plain => Ok(nameservers
            .iter()
            .map(|server| format!("{}\n", server))
            .collect()),
        OutputFormat::Yaml => serde_yaml::to_string(&Report {
            platform: &config.platform,
            nameservers,
        }),
    }
}

async fn run(config: &Config) -> ExitCode {
    let linux = config.resolv_conf_source();
    let windows = config.nslookup_source();
    let nameservers = match get_nameservers(&config.platform, &linux, &windows).await {
        Ok(nameservers) => nameservers,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    match render(config, &nameservers) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Unable to render nameservers: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let config = Config::parse();
    run(&config).await
}
