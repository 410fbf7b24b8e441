use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub gemini: GeminiConfig,
    /// Development-only identity injection. `None` unless `APP_ENV=development`,
    /// in which case the token comes from `DEV_BYPASS_TOKEN`.
    pub dev_bypass_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "campus-nexus".into()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "campus-nexus-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
        };
        let gemini = GeminiConfig {
            api_key: std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".into()),
        };
        let dev_bypass_token = match std::env::var("APP_ENV").as_deref() {
            Ok("development") => std::env::var("DEV_BYPASS_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            _ => None,
        };
        Ok(Self {
            database_url,
            jwt,
            gemini,
            dev_bypass_token,
        })
    }
}
