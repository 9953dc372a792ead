use log::LevelFilter;

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Build-time configuration.
///
/// The bundle is static, so everything is baked in when the wasm is compiled:
/// `GEMINI_API_KEY` (or `API_KEY`), `FINANWISE_MODEL`, `FINANWISE_API_BASE`
/// and `FINANWISE_LOG`.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("GEMINI_API_KEY").or(option_env!("API_KEY")),
            option_env!("FINANWISE_MODEL"),
            option_env!("FINANWISE_API_BASE"),
            option_env!("FINANWISE_LOG"),
        )
    }

    pub fn resolve(
        api_key: Option<&str>,
        model: Option<&str>,
        api_base: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let non_empty = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            api_key: non_empty(api_key),
            model: non_empty(model).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_empty(api_base)
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            log_level: log_level
                .and_then(|l| l.trim().parse().ok())
                .unwrap_or(LevelFilter::Info),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::default();
        assert_eq!(config.api_key, None);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = AppConfig::resolve(Some("   "), None, None, None);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn overrides_are_trimmed() {
        let config = AppConfig::resolve(
            Some(" abc123 "),
            Some("gemini-2.5-flash"),
            Some("http://localhost:8080/"),
            Some("debug"),
        );
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = AppConfig::resolve(None, None, None, Some("chatty"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
