//! Raw form snapshots and the rules that turn control values into filters.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

/// Lodging panel controls as read from the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LodgingForm {
    /// `#lodging-active-only` checkbox.
    pub active_only: bool,
    /// `#lodging-owner-type` text input.
    pub owner_type: String,
    /// `#lodging-multi-only` select value: `""`, `"true"` or `"false"`.
    pub multi_only: String,
}

impl Default for LodgingForm {
    fn default() -> Self {
        Self { active_only: true, owner_type: String::new(), multi_only: String::new() }
    }
}

/// Cheap-eats panel controls as read from the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheapForm {
    pub sido: String,
    pub sigungu: String,
    pub category: String,
    pub max_price: String,
}

/// Trimmed text, or `None` when nothing is left.
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Tri-state select: unset / `"true"` / `"false"`. Anything else counts as unset.
pub fn tri_state(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Numeric filter. Integers stay integers; other finite numbers are sent as
/// floats; blank or unparsable text is absent.
pub fn optional_number(raw: &str) -> Option<serde_json::Number> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n.into());
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
}
