use crate::error::{AppError, AppResult};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub database_min_connections: u32,
    #[serde(default = "default_connection_timeout")]
    pub database_connection_timeout: u64,

    pub redis_url: String,
    #[serde(default = "default_redis_pool_size")]
    pub redis_pool_size: u32,

    #[serde(default = "default_host")]
    pub server_host: String,
    #[serde(default = "default_port")]
    pub server_port: u16,
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    pub generation_api_key: String,
    #[serde(default = "default_generation_base_url")]
    pub generation_base_url: String,
    #[serde(default = "default_generation_model")]
    pub generation_model: String,
    #[serde(default = "default_generation_timeout")]
    pub generation_timeout_secs: u64,

    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

// 为了向后兼容，创建嵌套结构的访问器
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Clone, Debug)]
pub struct RedisConfig {
    pub url: String,
    pub pool_size: u32,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

#[derive(Clone, Debug)]
pub struct GenerationConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

// Default value functions
fn default_max_connections() -> u32 {
    20
}
fn default_min_connections() -> u32 {
    5
}
fn default_connection_timeout() -> u64 {
    30
}
fn default_redis_pool_size() -> u32 {
    20
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_jwt_secret() -> String {
    "your-secret-key".to_string()
}
fn default_generation_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}
fn default_generation_model() -> String {
    "gpt-4o-mini".to_string()
}
fn default_generation_timeout() -> u64 {
    120
} // roadmap documents are large, generation is slow
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let config = envy::from_env::<Config>()
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.database_max_connections == 0 {
            return Err(AppError::Config(
                "DATABASE_MAX_CONNECTIONS must be > 0".to_string(),
            ));
        }

        if self.database_min_connections > self.database_max_connections {
            return Err(AppError::Config(
                "DATABASE_MIN_CONNECTIONS cannot be greater than DATABASE_MAX_CONNECTIONS"
                    .to_string(),
            ));
        }

        if self.redis_pool_size == 0 {
            return Err(AppError::Config("REDIS_POOL_SIZE must be > 0".to_string()));
        }

        if self.jwt_secret == "your-secret-key" {
            return Err(AppError::Config(
                "JWT_SECRET must be set to a secure value".to_string(),
            ));
        }

        if self.generation_api_key.is_empty() {
            return Err(AppError::Config(
                "GENERATION_API_KEY must be set".to_string(),
            ));
        }

        if self.generation_timeout_secs == 0 {
            return Err(AppError::Config(
                "GENERATION_TIMEOUT_SECS must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    // 提供嵌套结构的访问器
    pub fn database(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database_url.clone(),
            max_connections: self.database_max_connections,
            min_connections: self.database_min_connections,
            connection_timeout: self.database_connection_timeout,
        }
    }

    pub fn redis(&self) -> RedisConfig {
        RedisConfig {
            url: self.redis_url.clone(),
            pool_size: self.redis_pool_size,
        }
    }

    pub fn server(&self) -> ServerConfig {
        ServerConfig {
            host: self.server_host.clone(),
            port: self.server_port,
            cors_origins: self.cors_origins.clone(),
        }
    }

    pub fn auth(&self) -> AuthConfig {
        AuthConfig {
            jwt_secret: self.jwt_secret.clone(),
        }
    }

    pub fn generation(&self) -> GenerationConfig {
        GenerationConfig {
            base_url: self.generation_base_url.clone(),
            api_key: self.generation_api_key.clone(),
            model: self.generation_model.clone(),
            timeout_secs: self.generation_timeout_secs,
        }
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format.clone(),
        }
    }
}

// 为了向后兼容，保留旧的字段访问方式
impl Config {
    pub fn db_url(&self) -> &str {
        &self.database_url
    }

    pub fn redis_url(&self) -> &str {
        &self.redis_url
    }
}
