use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(author, version, about = "Receive authenticated webhook payloads and write them to a file")]
pub struct Cli {
    /// Shared secret expected as `Authorization: Bearer <key>`
    #[arg(long = "auth_key")]
    pub auth_key: String,

    /// TCP port to listen on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Destination file the request body is written to
    // kept as a String so an empty value reaches Config validation instead
    // of being rejected by clap's PathBuf parser
    #[arg(long)]
    pub file: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub auth_key: String,
    pub file_path: PathBuf,
    pub bind_port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("--auth_key is required and must not be empty")]
    MissingAuthKey,
    #[error("--file is required and must not be empty")]
    MissingFilePath,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if cli.auth_key.is_empty() {
            return Err(ConfigError::MissingAuthKey);
        }
        if cli.file.is_empty() {
            return Err(ConfigError::MissingFilePath);
        }

        Ok(Self {
            auth_key: cli.auth_key,
            file_path: PathBuf::from(cli.file),
            bind_port: cli.port,
        })
    }

    pub fn bind_socket(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.bind_port))
    }
}
