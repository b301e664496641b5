use anyhow::{bail, Result};
use std::{env, path::PathBuf};
use subtle::ConstantTimeEq;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub cron: CronConfig,
    pub mail: Option<MailConfig>,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST")?,
            port: env::var("DATABASE_PORT")?.parse()?,
            username: env::var("DATABASE_USERNAME")?,
            password: env::var("DATABASE_PASSWORD")?,
            database: env::var("DATABASE_NAME")?,
        };
        let server = ServerConfig {
            port: match env::var("PORT") {
                Ok(port) => port.parse()?,
                Err(_) => 8080,
            },
        };
        // 空文字の CRON_SECRET は未設定として扱う
        let cron = CronConfig {
            secret: env::var("CRON_SECRET").ok().filter(|s| !s.is_empty()),
        };
        let mail = match (
            env::var("GMAIL_CLIENT_SECRET_PATH").ok(),
            env::var("GMAIL_TOKEN_PATH").ok(),
        ) {
            (Some(secret_path), Some(token_path)) => Some(MailConfig {
                client_secret_path: secret_path.into(),
                token_path: token_path.into(),
            }),
            (None, None) => None,
            _ => bail!("GMAIL_CLIENT_SECRET_PATH and GMAIL_TOKEN_PATH must be set together"),
        };
        Ok(Self {
            database,
            server,
            cron,
            mail,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct ServerConfig {
    pub port: u16,
}

#[derive(Clone, Default)]
pub struct CronConfig {
    pub secret: Option<String>,
}

impl CronConfig {
    /// Bearer トークンが設定済みのシークレットと一致するかを判定する。
    /// 比較は定数時間で行い、シークレット未設定の場合は常に許可する。
    pub fn authorizes(&self, bearer: Option<&str>) -> bool {
        match (&self.secret, bearer) {
            (None, _) => true,
            (Some(secret), Some(token)) => secret.as_bytes().ct_eq(token.as_bytes()).into(),
            (Some(_), None) => false,
        }
    }
}

#[derive(Clone)]
pub struct MailConfig {
    pub client_secret_path: PathBuf,
    pub token_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cron_without_secret_accepts_anything() {
        let cron = CronConfig::default();
        assert!(cron.authorizes(None));
        assert!(cron.authorizes(Some("whatever")));
    }

    #[test]
    fn cron_with_secret_requires_exact_token() {
        let cron = CronConfig {
            secret: Some("s3cret".into()),
        };
        assert!(cron.authorizes(Some("s3cret")));
        assert!(!cron.authorizes(Some("S3CRET")));
        assert!(!cron.authorizes(Some("s3cre")));
        assert!(!cron.authorizes(Some("s3cret ")));
        assert!(!cron.authorizes(Some("")));
        assert!(!cron.authorizes(None));
    }
}
