/// Default persona sent as the system message.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are an assistant trained as an expert in Bash and GNU utilities.";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Settings for one invocation, resolved from the environment.
///
/// Environment:
/// - OPENAI_API_KEY          -> bearer credential (checked at request time)
/// - OPENAI_BASE_URL         -> API base, `/chat/completions` is appended
/// - SHELLBOT_MODEL          -> model name
/// - SHELLBOT_SYSTEM_PROMPT  -> persona text for the system message
/// - NO_COLOR                -> disable ANSI colors when non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub system_prompt: String,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            api_key: get(API_KEY_VAR),
            base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            model: get("SHELLBOT_MODEL").unwrap_or(defaults.model),
            system_prompt: get("SHELLBOT_SYSTEM_PROMPT").unwrap_or(defaults.system_prompt),
            color: get("NO_COLOR").is_none(),
        }
    }

    /// Full chat-completions endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let cfg = Config::from_lookup(lookup_from(&[]));
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.endpoint(), "https://api.openai.com/v1/chat/completions");
        assert!(cfg.color);
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://127.0.0.1:9/v1/"),
            ("SHELLBOT_MODEL", "gpt-4o-mini"),
            ("SHELLBOT_SYSTEM_PROMPT", "You are terse."),
            ("NO_COLOR", "1"),
        ]));
        assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.endpoint(), "http://127.0.0.1:9/v1/chat/completions");
        assert_eq!(cfg.model, "gpt-4o-mini");
        assert_eq!(cfg.system_prompt, "You are terse.");
        assert!(!cfg.color);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "   "),
            ("SHELLBOT_MODEL", ""),
            ("NO_COLOR", ""),
        ]));
        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert!(cfg.color);
    }
}
