//
// Copyright (c) The Ldpd Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::Ipv4Addr;
use std::path::Path;
use std::str::FromStr;

use ipnetwork::Ipv4Network;
use serde::Deserialize;

use crate::packet::Identifier;
use crate::session::SessionConfig;

// Daemon configuration, loaded from a TOML file.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub router_id: Ipv4Addr,
    // Local address used for discovery and as the transport endpoint.
    pub address: Ipv4Addr,
    // Interval between multicast Hellos, in seconds.
    pub hello_interval: u64,
    pub hello_holdtime: u16,
    pub keepalive_time: u16,
    pub advertise: Advertise,
}

// Demonstration content of the Address and Label Mapping advertisements
// sent when a session first becomes operational.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Advertise {
    pub addresses: Vec<Ipv4Addr>,
    pub prefixes: Vec<Ipv4Network>,
    pub label: u32,
}

// Config load errors.
#[derive(Debug)]
pub enum ConfigError {
    Read(std::io::Error),
    Parse(toml::de::Error),
}

// ===== impl Config =====

impl Config {
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let data =
            std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        toml::from_str(&data).map_err(ConfigError::Parse)
    }

    pub fn identifier(&self) -> Identifier {
        Identifier::new(self.router_id, 0)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            keepalive_time: self.keepalive_time,
            addresses: self.advertise.addresses.clone(),
            mapping_prefixes: self.advertise.prefixes.clone(),
            mapping_label: self.advertise.label,
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            router_id: Ipv4Addr::new(1, 1, 1, 1),
            address: Ipv4Addr::UNSPECIFIED,
            hello_interval: 5,
            hello_holdtime: 15,
            keepalive_time: 180,
            advertise: Advertise::default(),
        }
    }
}

// ===== impl Advertise =====

impl Default for Advertise {
    fn default() -> Advertise {
        Advertise {
            addresses: vec![Ipv4Addr::new(10, 0, 0, 1)],
            prefixes: vec![Ipv4Network::from_str("10.0.0.0/24").unwrap()],
            label: 100,
        }
    }
}

// ===== impl ConfigError =====

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read(error) => {
                write!(f, "failed to read config file: {error}")
            }
            ConfigError::Parse(error) => {
                write!(f, "failed to parse config file: {error}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
