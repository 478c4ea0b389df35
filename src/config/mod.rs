use once_cell::sync::Lazy;
use std::env;

/// Fallback signing secret for development. Running with this value in
/// production is unsafe; main() logs a warning when it is in effect.
pub const DEV_JWT_SECRET: &str = "dev-secret-change-me";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Allowed CORS origins. Empty means permissive (development).
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: String,
    /// In-memory mode: nothing survives a restart. This is the deliberate
    /// default for production deployments on read-only filesystems.
    pub in_memory: bool,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub admin_username: String,
    pub admin_password: String,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Ok(v) = env::var("CORS_ORIGINS") {
            self.server.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Ok(v) = env::var("DATABASE_PATH") {
            self.database.path = v;
            self.database.in_memory = false;
        }
        if let Ok(v) = env::var("DATABASE_IN_MEMORY") {
            self.database.in_memory = v.parse().unwrap_or(self.database.in_memory);
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }

        if let Ok(v) = env::var("ADMIN_USERNAME") {
            self.security.admin_username = v;
        }
        if let Ok(v) = env::var("ADMIN_PASSWORD") {
            self.security.admin_password = v;
        }
        if let Ok(v) = env::var("JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = v.parse().unwrap_or(self.security.jwt_expiry_hours);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                port: 3001,
                cors_origins: vec![],
            },
            database: DatabaseConfig {
                path: "data/research_portfolio.db".to_string(),
                in_memory: false,
                max_connections: 5,
            },
            security: SecurityConfig {
                admin_username: "admin".to_string(),
                admin_password: "admin123".to_string(),
                jwt_secret: DEV_JWT_SECRET.to_string(),
                jwt_expiry_hours: 24,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                port: 3001,
                cors_origins: vec![],
            },
            database: DatabaseConfig {
                // Read-only filesystem in the hosted deployment, so the
                // store lives in memory unless DATABASE_PATH is given.
                path: "data/research_portfolio.db".to_string(),
                in_memory: true,
                max_connections: 5,
            },
            security: SecurityConfig {
                admin_username: "admin".to_string(),
                admin_password: "admin123".to_string(),
                jwt_secret: DEV_JWT_SECRET.to_string(),
                jwt_expiry_hours: 24,
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
