//! application entry point

use crate::server::model::config::ServerConfig;
use anyhow::Context;
use derive_more::Display;
use log::info;
use std::env;
use std::path::Path;
use std::str::FromStr;

mod server;

const DOTENV_LOADING_FAILED_MSG: &str = "failed to load envs from dotenv files, aborting";
const CONFIG_LOADING_FAILED_MSG: &str = "failed to load server config, aborting";

#[actix_web::main()]
async fn main() -> anyhow::Result<()> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    match env {
        Env::Prod | Env::Stg => {} // injected by deployment
        Env::Dev => dotenvy::from_path(Path::new(".env.dev")).context(DOTENV_LOADING_FAILED_MSG)?,
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // c. run app
    let config = ServerConfig::from_lookup(|key| env::var(key).ok()).context(CONFIG_LOADING_FAILED_MSG)?;

    info!("App is starting in env={}, addr={}", env, config.addr);

    server::run(config).await.context("server stopped unexpectedly")
}

#[derive(Debug, Display, PartialEq)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn env_from_str() {
        assert_eq!("dev".parse::<Env>(), Ok(Env::Dev));
        assert_eq!("stg".parse::<Env>(), Ok(Env::Stg));
        assert_eq!("prod".parse::<Env>(), Ok(Env::Prod));
        assert_eq!("Prod".parse::<Env>(), Err("Invalid Env: Prod".to_string()));
        assert!("".parse::<Env>().is_err());
    }
}
