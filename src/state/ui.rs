//! Page chrome state: active bot and backend status.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::fmt;
use std::str::FromStr;

use crate::net::types::RequestError;

/// The two assistants. Drives the `data-bot` attribute on cards and tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Bot {
    /// Lodging-registry assistant.
    #[default]
    Lodging,
    /// Cheap-eats ("착한 가격 가게") assistant.
    Cheap,
}

impl Bot {
    pub const ALL: [Bot; 2] = [Bot::Lodging, Bot::Cheap];

    /// Value of the `data-bot` attribute and the id suffix used in markup.
    pub fn as_str(self) -> &'static str {
        match self {
            Bot::Lodging => "lodging",
            Bot::Cheap => "cheap",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Bot::Lodging => "숙박 데이터 챗봇",
            Bot::Cheap => "착한 가격 가게 챗봇",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Bot::Lodging => "숙박업 공공데이터를 조건별로 분석해 드립니다.",
            Bot::Cheap => "지역과 가격 조건에 맞는 착한 가격 가게를 추천해 드립니다.",
        }
    }

    pub fn panel_id(self) -> String {
        format!("panel-{}", self.as_str())
    }
}

impl fmt::Display for Bot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a `data-bot` value outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown bot: {0}")]
pub struct UnknownBot(pub String);

impl FromStr for Bot {
    type Err = UnknownBot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lodging" => Ok(Bot::Lodging),
            "cheap" => Ok(Bot::Cheap),
            other => Err(UnknownBot(other.to_owned())),
        }
    }
}

/// Reachability of the backend as reported by `GET /health`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendStatus {
    /// Health check not answered yet.
    #[default]
    Checking,
    Online,
    Offline,
}

impl BackendStatus {
    /// Map the outcome of a health check to a badge state.
    pub fn from_health(result: &Result<bool, RequestError>) -> Self {
        match result {
            Ok(true) => BackendStatus::Online,
            Ok(false) | Err(_) => BackendStatus::Offline,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BackendStatus::Checking => "확인 중",
            BackendStatus::Online => "연결됨",
            BackendStatus::Offline => "연결 안 됨",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            BackendStatus::Checking => "status-badge status-badge--checking",
            BackendStatus::Online => "status-badge status-badge--online",
            BackendStatus::Offline => "status-badge status-badge--offline",
        }
    }
}

/// UI state for the selector and header.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_bot: Bot,
    pub backend: BackendStatus,
}

impl UiState {
    /// Make `bot` the only active card, tab and panel.
    pub fn activate(&mut self, bot: Bot) {
        self.active_bot = bot;
    }

    pub fn is_active(&self, bot: Bot) -> bool {
        self.active_bot == bot
    }
}
