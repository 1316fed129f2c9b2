//! Generic submission state machine for one panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! A submit runs in three steps. `begin` validates the draft, renders the
//! user message and the placeholder, and flips the panel into `submitting`.
//! The request is then awaited with no panel borrow held. `settle` swaps the
//! placeholder for the answer or the generic error and returns the panel to
//! `idle`. Only the network call suspends, so checking `in_flight` at the
//! top of `begin` is enough to keep one request per panel.
//!
//! ERROR HANDLING
//! ==============
//! Validation misses are silent. Every `RequestError` is logged and rendered
//! as the same assistant bubble; the panel is always usable afterwards.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};

use super::assistant::Assistant;
use crate::config::{InputRules, InputVerdict};
use crate::net::api::ChatTransport;
use crate::net::types::{ChatResponse, RequestError};
use crate::state::panel::{MessageId, PanelState, Role, Tone};

pub const PLACEHOLDER_TEXT: &str = "생각 중...";
pub const PLACEHOLDER_META: &str = "로딩 중";
pub const FAILURE_TEXT: &str = "요청 중 오류가 발생했습니다.";
pub const FAILURE_META: &str = "에러";

/// Somewhere a `PanelState` lives: a signal in the UI, a `RefCell` in tests.
pub trait PanelStore {
    /// Run `f` against the panel. `None` if the panel no longer exists.
    fn with_panel<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> Option<R>;
}

impl PanelStore for RefCell<PanelState> {
    fn with_panel<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl PanelStore for RwSignal<PanelState> {
    fn with_panel<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// A request that has been started and must be settled exactly once.
#[derive(Debug)]
pub struct Pending<R> {
    pub placeholder: MessageId,
    pub request: R,
}

/// Result of [`begin`].
#[derive(Debug)]
pub enum Begin<R> {
    /// A request is already in flight; nothing changed.
    Busy,
    /// Draft was blank; nothing changed.
    Empty,
    /// Draft was too short or a filler token; the draft was cleared.
    Dropped,
    Started(Pending<R>),
}

/// How a whole submit attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Busy,
    Empty,
    Dropped,
    Answered,
    Failed,
    /// The panel was disposed before the request settled.
    Detached,
}

/// Validate the draft and, if it is a real question, enter `submitting`.
pub fn begin<A: Assistant>(panel: &mut PanelState, rules: &InputRules, form: &A::Form) -> Begin<A::Request> {
    if panel.in_flight {
        return Begin::Busy;
    }

    let question = match rules.check(&panel.draft) {
        InputVerdict::Empty => return Begin::Empty,
        InputVerdict::Dropped => {
            panel.draft.clear();
            return Begin::Dropped;
        }
        InputVerdict::Accepted(question) => question,
    };

    panel.transcript.append(Role::User, question.clone(), None, Tone::Normal);
    panel.draft.clear();

    let request = A::build_request(question, form, panel.model_choice());

    panel.in_flight = true;
    let placeholder = panel.transcript.append(
        Role::Assistant,
        PLACEHOLDER_TEXT,
        Some(PLACEHOLDER_META.to_owned()),
        Tone::Loading,
    );

    Begin::Started(Pending { placeholder, request })
}

/// Replace the placeholder with the outcome and return to `idle`.
pub fn settle<A: Assistant>(
    panel: &mut PanelState,
    placeholder: MessageId,
    result: &Result<ChatResponse, RequestError>,
) -> SubmitOutcome {
    panel.transcript.remove(placeholder);
    panel.in_flight = false;

    match result {
        Ok(response) => {
            let meta = A::describe(response);
            panel
                .transcript
                .append(Role::Assistant, response.answer.clone(), Some(meta), Tone::Normal);
            SubmitOutcome::Answered
        }
        Err(err) => {
            log::error!("{} chat request failed: {err}", A::BOT);
            panel
                .transcript
                .append(Role::Assistant, FAILURE_TEXT, Some(FAILURE_META.to_owned()), Tone::Error);
            SubmitOutcome::Failed
        }
    }
}

/// Run one submit attempt end to end.
pub async fn submit<A, S, T>(store: &S, transport: &T, rules: &InputRules, form: &A::Form) -> SubmitOutcome
where
    A: Assistant,
    S: PanelStore,
    T: ChatTransport,
{
    let pending = match store.with_panel(|panel| begin::<A>(panel, rules, form)) {
        Some(Begin::Started(pending)) => pending,
        Some(Begin::Busy) => {
            log::debug!("{} submit ignored: request in flight", A::BOT);
            return SubmitOutcome::Busy;
        }
        Some(Begin::Empty) => return SubmitOutcome::Empty,
        Some(Begin::Dropped) => {
            log::debug!("{} submit dropped: input too short", A::BOT);
            return SubmitOutcome::Dropped;
        }
        None => return SubmitOutcome::Detached,
    };

    let result = transport.post_chat(A::ENDPOINT, &pending.request).await;

    store
        .with_panel(|panel| settle::<A>(panel, pending.placeholder, &result))
        .unwrap_or(SubmitOutcome::Detached)
}
