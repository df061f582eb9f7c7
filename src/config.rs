use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,
    pub cors_origin: Option<String>,
    pub seed_on_start: bool,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

/// Settings for the `migrate` and `seed` tools, which never issue tokens and
/// so do not need `JWT_SECRET`.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.is_empty())
}

fn credentials<'a>(
    username: &'a Option<String>,
    password: &'a Option<String>,
) -> Option<(&'a str, &'a str)> {
    match (username, password) {
        (Some(user), Some(password)) => Some((user.as_str(), password.as_str())),
        _ => None,
    }
}

impl DatabaseConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = non_empty(&lookup, "DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is not set"))?;
        Ok(Self {
            database_url,
            admin_username: non_empty(&lookup, "ADMIN_USERNAME"),
            admin_password: non_empty(&lookup, "ADMIN_PASSWORD"),
        })
    }

    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        credentials(&self.admin_username, &self.admin_password)
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let DatabaseConfig {
            database_url,
            admin_username,
            admin_password,
        } = DatabaseConfig::from_lookup(&lookup)?;
        let jwt_secret = non_empty(&lookup, "JWT_SECRET")
            .ok_or_else(|| anyhow::anyhow!("JWT_SECRET is not set"))?;
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("APP_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        // One week.
        let jwt_ttl_hours = lookup("JWT_TTL_HOURS")
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(24 * 7);
        let cors_origin = non_empty(&lookup, "CORS_ORIGIN");
        let seed_on_start = lookup("SEED_ON_START")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Ok(Self {
            port,
            database_url,
            host,
            jwt_secret,
            jwt_ttl_hours,
            cors_origin,
            seed_on_start,
            admin_username,
            admin_password,
        })
    }

    /// Seed admin account, only when both halves are configured.
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        credentials(&self.admin_username, &self.admin_password)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn database_tools_do_not_need_a_jwt_secret() {
        let vars = lookup(&[
            ("DATABASE_URL", "postgres://localhost/salon"),
            ("ADMIN_USERNAME", "owner"),
            ("ADMIN_PASSWORD", "secret"),
        ]);

        let db = DatabaseConfig::from_lookup(&vars).expect("database config");
        assert_eq!(db.database_url, "postgres://localhost/salon");
        assert_eq!(db.admin_credentials(), Some(("owner", "secret")));

        assert!(AppConfig::from_lookup(&vars).is_err());
    }

    #[test]
    fn app_config_applies_defaults() {
        let vars = lookup(&[
            ("DATABASE_URL", "postgres://localhost/salon"),
            ("JWT_SECRET", "s"),
            ("JWT_TTL_HOURS", "-3"),
            ("ADMIN_USERNAME", "owner"),
        ]);

        let config = AppConfig::from_lookup(vars).expect("config");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.jwt_ttl_hours, 168);
        assert!(!config.seed_on_start);
        assert_eq!(config.cors_origin, None);
        assert_eq!(config.admin_credentials(), None);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        assert!(DatabaseConfig::from_lookup(lookup(&[("JWT_SECRET", "s")])).is_err());
    }
}
