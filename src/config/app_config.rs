use serde::Deserialize;

/// Teams registered when no configuration overrides them
pub const DEFAULT_TEAMS: [&str; 10] = [
    "Mexico",
    "Canada",
    "Spain",
    "Brazil",
    "Germany",
    "France",
    "Uruguay",
    "Italy",
    "Argentina",
    "Australia",
];

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub scoreboard: ScoreboardConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Scoreboard seeding configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    /// Team names registered in the directory at startup
    pub teams: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            teams: DEFAULT_TEAMS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("SCOREBOARD")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("scoreboard.teams")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
