use clap::{Args as ClapArgs, Parser};
use mealguard_core::domain::{
    allergen::lexicon::MatchMode,
    common::{DatabaseConfig, LLMConfig, MealguardConfig, SafetyConfig},
};

#[derive(Debug, Clone, Parser)]
#[command(name = "mealguard-api", version, about = "Mealguard recipe safety API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub safety: SafetyArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(id = "database_host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database_port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "mealguard")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "")]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long = "llm-temperature", env = "LLM_TEMPERATURE", default_value_t = 0.4)]
    pub temperature: f32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SafetyArgs {
    /// `substring` or `word_start`.
    #[arg(long = "match-mode", env = "ALLERGEN_MATCH_MODE", default_value = "substring")]
    pub match_mode: MatchMode,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for MealguardConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                temperature: args.llm.temperature,
            },
            safety: SafetyConfig {
                match_mode: args.safety.match_mode,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_convert_to_config() {
        let args = Args::try_parse_from(["mealguard-api"]).unwrap();
        let config = MealguardConfig::from(args);

        assert_eq!(config.database.port, 5432);
        assert_eq!(config.llm.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.safety.match_mode, MatchMode::Substring);
    }

    #[test]
    fn test_match_mode_flag() {
        let args =
            Args::try_parse_from(["mealguard-api", "--match-mode", "word_start"]).unwrap();
        assert_eq!(args.safety.match_mode, MatchMode::WordStart);

        assert!(Args::try_parse_from(["mealguard-api", "--match-mode", "fuzzy"]).is_err());
    }

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let args = Args::try_parse_from([
            "mealguard-api",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();
        assert_eq!(args.server.allowed_origins.len(), 2);
    }
}
