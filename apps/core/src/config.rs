use crate::error::AppError;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_NAME: &str = "echolearn";

/// Server configuration, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Document store location; persistence is disabled when absent.
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

/// Which database variables were present in the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatabaseEnv {
    pub url_set: bool,
    pub name_set: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            database_url: None,
            database_name: None,
        }
    }
}

impl ServerConfig {
    /// Reads `PORT`, `DATABASE_URL` and `DATABASE_NAME`. Empty values count as unset.
    pub fn from_env() -> Result<Self, AppError> {
        let port = match non_empty_var("PORT") {
            Some(raw) => raw.trim().parse::<u16>()?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            database_url: non_empty_var("DATABASE_URL"),
            database_name: non_empty_var("DATABASE_NAME"),
            ..Self::default()
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn database_env(&self) -> DatabaseEnv {
        DatabaseEnv {
            url_set: self.database_url.is_some(),
            name_set: self.database_name.is_some(),
        }
    }

    /// Name used for the store, falling back to the project default.
    pub fn store_name(&self) -> &str {
        self.database_name.as_deref().unwrap_or(DEFAULT_DATABASE_NAME)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
