//! The two assistants and the request bodies they send.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use serde::Serialize;

use super::filters::{CheapForm, LodgingForm, optional_number, optional_text, tri_state};
use crate::net::types::ChatResponse;
use crate::state::ui::Bot;

/// Panel-specific parameters of the submission state machine.
pub trait Assistant {
    /// Snapshot of the panel's filter controls.
    type Form;
    /// JSON body posted to [`Assistant::ENDPOINT`].
    type Request: Serialize;

    const BOT: Bot;
    const ENDPOINT: &'static str;

    fn build_request(question: String, form: &Self::Form, model: Option<String>) -> Self::Request;

    /// Metadata line rendered under a successful answer.
    fn describe(response: &ChatResponse) -> String;
}

/// Lodging-registry assistant (`POST /lodging/chat`).
pub struct Lodging;

/// Cheap-eats assistant (`POST /cheap/chat`).
pub struct Cheap;

/// Body of `POST /lodging/chat`. Absent values serialize as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LodgingRequest {
    pub question: String,
    pub active_only: bool,
    pub owner_type: Option<String>,
    pub multi_only: Option<bool>,
    pub model: Option<String>,
}

/// Body of `POST /cheap/chat`. Absent values serialize as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheapRequest {
    pub question: String,
    pub sido: Option<String>,
    pub sigungu: Option<String>,
    pub category: Option<String>,
    pub max_price: Option<serde_json::Number>,
    pub model: Option<String>,
}

impl Assistant for Lodging {
    type Form = LodgingForm;
    type Request = LodgingRequest;

    const BOT: Bot = Bot::Lodging;
    const ENDPOINT: &'static str = "/lodging/chat";

    fn build_request(question: String, form: &LodgingForm, model: Option<String>) -> LodgingRequest {
        LodgingRequest {
            question,
            active_only: form.active_only,
            owner_type: optional_text(&form.owner_type),
            multi_only: tri_state(&form.multi_only),
            model,
        }
    }

    fn describe(response: &ChatResponse) -> String {
        format!("검색된 행: {}개 · 샘플: {}개", response.row_count, response.sample_size)
    }
}

impl Assistant for Cheap {
    type Form = CheapForm;
    type Request = CheapRequest;

    const BOT: Bot = Bot::Cheap;
    const ENDPOINT: &'static str = "/cheap/chat";

    fn build_request(question: String, form: &CheapForm, model: Option<String>) -> CheapRequest {
        CheapRequest {
            question,
            sido: optional_text(&form.sido),
            sigungu: optional_text(&form.sigungu),
            category: optional_text(&form.category),
            max_price: optional_number(&form.max_price),
            model,
        }
    }

    fn describe(response: &ChatResponse) -> String {
        format!("필터 후 가게 수: {}개 · 샘플: {}개", response.row_count, response.sample_size)
    }
}
