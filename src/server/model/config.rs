use derive_more::{Display, Error};
use std::net::SocketAddrV4;
use std::str::FromStr;

const DEFAULT_HOST_ADDR: &str = "127.0.0.1:8080";

/// Server configs
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    /// whether a created order is echoed back in the response body
    pub echo_created_order: bool,
}

#[derive(Debug, Display, Error, PartialEq)]
pub(crate) enum ConfigError {
    #[display("invalid HOST `{value}`, expected ip:port")]
    InvalidHost { value: String },
    #[display("invalid {key} `{value}`, expected true or false")]
    InvalidFlag { key: &'static str, value: String },
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, echo_created_order: bool) -> Self {
        Self {
            addr,
            echo_created_order,
        }
    }

    /// Build the config from a variable lookup, e.g. `|key| std::env::var(key).ok()`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or(DEFAULT_HOST_ADDR.to_string());
        let addr = SocketAddrV4::from_str(host.trim())
            .map_err(|_| ConfigError::InvalidHost { value: host.clone() })?;

        let echo_created_order = match lookup("ORDERS_ECHO_CREATED") {
            None => true,
            Some(value) => parse_flag("ORDERS_ECHO_CREATED", value)?,
        };

        Ok(Self::new(addr, echo_created_order))
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key, value }),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;
    use std::net::Ipv4Addr;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.addr, SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8080));
        assert!(config.echo_created_order);
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0:3000"),
            ("ORDERS_ECHO_CREATED", "FALSE"),
        ]))
        .unwrap();
        assert_eq!(config, ServerConfig::new(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 3000), false));

        let config = ServerConfig::from_lookup(lookup_from(&[("ORDERS_ECHO_CREATED", "1")])).unwrap();
        assert!(config.echo_created_order);
    }

    #[test]
    fn rejects_bad_host() {
        let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "localhost")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidHost { value: "localhost".to_string() });
        assert_eq!(err.to_string(), "invalid HOST `localhost`, expected ip:port");
    }

    #[test]
    fn rejects_bad_flag() {
        let err = ServerConfig::from_lookup(lookup_from(&[("ORDERS_ECHO_CREATED", "yes")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidFlag {
                key: "ORDERS_ECHO_CREATED",
                value: "yes".to_string()
            }
        );
    }
}
