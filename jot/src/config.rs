use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub aws: Option<AwsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// AWS credentials and service targets, read once at process start.
///
/// Present only when the access key, secret key, and region are all set.
/// The bucket and model id stay optional within it: storage and inference
/// are enabled independently, and each route degrades when its half is
/// missing.
#[derive(Debug, Clone, Deserialize)]
pub struct AwsConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
    pub region: String,
    pub bucket: Option<String>,
    pub model_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let aws = match (
            env::var("AWS_ACCESS_KEY_ID"),
            env::var("AWS_SECRET_ACCESS_KEY"),
            env::var("AWS_REGION"),
        ) {
            (Ok(access_key_id), Ok(secret_access_key), Ok(region)) => Some(AwsConfig {
                access_key_id,
                secret_access_key,
                session_token: env::var("AWS_SESSION_TOKEN").ok(),
                region,
                bucket: env::var("S3_BUCKET_NAME").ok(),
                model_id: env::var("BEDROCK_MODEL_ID").ok(),
            }),
            _ => None,
        };

        Self {
            server: ServerConfig {
                host: env::var("JOT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("JOT_PORT", 3000),
            },
            aws,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
