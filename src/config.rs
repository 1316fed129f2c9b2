//! Build-time client configuration.
//!
//! DESIGN
//! ======
//! The bundle runs in the browser, so there is no process environment to read
//! at startup. Overrides are captured with `option_env!` when the WASM bundle
//! is compiled and parsed by the pure helpers below, which keeps them testable
//! without touching `std::env`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Model id the backend falls back to when a request carries `model: null`.
pub const BACKEND_DEFAULT_MODEL: &str = "qwen2.5:14b-q4_K_M";

/// Shortest accepted question, in characters, after trimming.
pub const DEFAULT_MIN_CHARS: usize = 2;

/// Filler tokens dropped without a reply.
pub const DEFAULT_STOPWORDS: [&str; 4] = ["줘", "라", "다줘", "나줘"];

/// Top-level client settings shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined onto endpoint paths. Empty means same origin.
    pub api_base: String,
    pub input_rules: InputRules,
    /// Options offered by both model selectors, in display order.
    pub models: Vec<ModelOption>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: String::new(), input_rules: InputRules::default(), models: default_models() }
    }
}

impl ClientConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `DUOBOT_API_BASE`: endpoint prefix, default same origin
    /// - `DUOBOT_MIN_CHARS`: default 2
    /// - `DUOBOT_STOPWORDS`: comma separated, replaces the default list
    /// - `DUOBOT_MODELS`: comma separated ids appended to the model selector
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("DUOBOT_API_BASE"),
            option_env!("DUOBOT_MIN_CHARS"),
            option_env!("DUOBOT_STOPWORDS"),
            option_env!("DUOBOT_MODELS"),
        )
    }

    pub(crate) fn from_values(
        api_base: Option<&str>,
        min_chars: Option<&str>,
        stopwords: Option<&str>,
        models: Option<&str>,
    ) -> Self {
        let mut all_models = default_models();
        for id in split_list(models.unwrap_or_default()) {
            if all_models.iter().all(|m| m.id != id) {
                all_models.push(ModelOption::new(&id, &id));
            }
        }

        Self {
            api_base: normalize_api_base(api_base.unwrap_or_default()),
            input_rules: InputRules {
                min_chars: parse_min_chars(min_chars),
                stopwords: stopwords.map_or_else(default_stopwords, split_list),
            },
            models: all_models,
        }
    }
}

/// Rules deciding whether raw input is worth sending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputRules {
    /// Trimmed input shorter than this many characters is dropped.
    pub min_chars: usize,
    /// Exact-match tokens dropped regardless of length.
    pub stopwords: Vec<String>,
}

impl Default for InputRules {
    fn default() -> Self {
        Self { min_chars: DEFAULT_MIN_CHARS, stopwords: default_stopwords() }
    }
}

/// Result of checking raw input against [`InputRules`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputVerdict {
    /// Nothing but whitespace. The input field is left alone.
    Empty,
    /// Too short or a filler token. The input field is cleared, nothing is sent.
    Dropped,
    /// Trimmed question ready to send.
    Accepted(String),
}

impl InputRules {
    pub fn check(&self, raw: &str) -> InputVerdict {
        let question = raw.trim();
        if question.is_empty() {
            return InputVerdict::Empty;
        }
        if question.chars().count() < self.min_chars || self.stopwords.iter().any(|w| w == question) {
            return InputVerdict::Dropped;
        }
        InputVerdict::Accepted(question.to_owned())
    }
}

/// One entry of a model `<select>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelOption {
    /// Value sent as `model`; empty means "let the server pick".
    pub id: String,
    pub label: String,
}

impl ModelOption {
    pub fn new(id: &str, label: &str) -> Self {
        Self { id: id.to_owned(), label: label.to_owned() }
    }
}

fn default_models() -> Vec<ModelOption> {
    vec![ModelOption::new("", "서버 기본 모델"), ModelOption::new(BACKEND_DEFAULT_MODEL, "Qwen2.5 14B (Q4_K_M)")]
}

fn default_stopwords() -> Vec<String> {
    DEFAULT_STOPWORDS.iter().map(|w| (*w).to_owned()).collect()
}

fn normalize_api_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn parse_min_chars(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_MIN_CHARS)
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
