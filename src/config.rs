use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub business_unit: String,
    pub environment: String,
    pub log_level: String,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
    pub to: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let business_unit = env_required("CONTACT_BUSINESS_UNIT")?;

        let host: IpAddr = env_or("CONTACT_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_HOST: {e}"))?;

        let port: u16 = env_or("CONTACT_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_PORT: {e}"))?;

        let environment = env_or("CONTACT_ENVIRONMENT", "dev");
        let log_level = env_or("CONTACT_LOG_LEVEL", "info");

        let smtp = match (
            std::env::var("CONTACT_SMTP_HOST").ok(),
            std::env::var("CONTACT_SMTP_PORT").ok(),
            std::env::var("CONTACT_SMTP_USER").ok(),
            std::env::var("CONTACT_SMTP_PASS").ok(),
            std::env::var("CONTACT_SMTP_FROM").ok(),
            std::env::var("CONTACT_SMTP_TO").ok(),
        ) {
            (Some(host), Some(port), Some(user), Some(pass), Some(from), Some(to)) => {
                Some(SmtpConfig {
                    host,
                    port: port
                        .parse()
                        .map_err(|e| format!("Invalid CONTACT_SMTP_PORT: {e}"))?,
                    user,
                    pass,
                    from,
                    to,
                })
            }
            _ => None,
        };

        Ok(Config {
            database_url,
            host,
            port,
            business_unit,
            environment,
            log_level,
            smtp,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
