//! Connection settings resolution.
//!
//! Each recognized option is read from its environment variable and falls
//! back to a hardcoded default when the variable is unset.

use sample_data_api::{SeedError, SeedResult};
use sqlx::postgres::PgConnectOptions;
use std::fmt;

/// The recognized connection options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Host,
    Port,
    DbName,
    User,
    Password,
}

impl Setting {
    pub const ALL: [Setting; 5] = [
        Setting::Host,
        Setting::Port,
        Setting::DbName,
        Setting::User,
        Setting::Password,
    ];

    pub fn env_var(&self) -> &'static str {
        match self {
            Setting::Host => "PGHOST",
            Setting::Port => "PGPORT",
            Setting::DbName => "PGDB",
            Setting::User => "PGUSER",
            Setting::Password => "PGPASSWORD",
        }
    }

    pub fn default_value(&self) -> &'static str {
        match self {
            Setting::Host => "localhost",
            Setting::Port => "5432",
            Setting::DbName => "agentic_db",
            Setting::User => "agentic",
            Setting::Password => "agentic_pass",
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

impl ConnectionSettings {
    /// Resolves every [`Setting`] through `lookup`, then through its default.
    pub fn resolve<F>(lookup: F) -> SeedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |setting: Setting| {
            lookup(setting.env_var()).unwrap_or_else(|| setting.default_value().to_string())
        };

        let raw_port = value(Setting::Port);
        let port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|_| SeedError::InvalidSetting {
                name: Setting::Port.env_var(),
                value: raw_port.clone(),
            })?;

        Ok(Self {
            host: value(Setting::Host),
            port,
            dbname: value(Setting::DbName),
            user: value(Setting::User),
            password: value(Setting::Password),
        })
    }

    pub fn from_env() -> SeedResult<Self> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.dbname)
            .username(&self.user)
            .password(&self.password)
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}
