use std::cell::Cell;
use std::collections::VecDeque;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;
use serde::Serialize;

use super::*;
use crate::chat::assistant::{Cheap, Lodging};
use crate::chat::filters::{CheapForm, LodgingForm};

/// Transport that answers from a queue and records what was posted.
#[derive(Default)]
struct FakeTransport {
    replies: RefCell<VecDeque<Result<ChatResponse, RequestError>>>,
    posted: RefCell<Vec<(String, serde_json::Value)>>,
}

impl FakeTransport {
    fn replying(reply: Result<ChatResponse, RequestError>) -> Self {
        let transport = Self::default();
        transport.replies.borrow_mut().push_back(reply);
        transport
    }
}

impl ChatTransport for FakeTransport {
    fn post_chat<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> impl Future<Output = Result<ChatResponse, RequestError>> {
        let value = serde_json::to_value(body).unwrap();
        self.posted.borrow_mut().push((path.to_owned(), value));
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(RequestError::Network("no reply queued".to_owned())));
        async move { reply }
    }
}

/// Transport whose single reply is released by the test.
struct GatedTransport {
    calls: Cell<usize>,
    gate: RefCell<Option<oneshot::Receiver<Result<ChatResponse, RequestError>>>>,
}

impl ChatTransport for GatedTransport {
    fn post_chat<B: Serialize>(
        &self,
        _path: &str,
        _body: &B,
    ) -> impl Future<Output = Result<ChatResponse, RequestError>> {
        self.calls.set(self.calls.get() + 1);
        let gate = self.gate.borrow_mut().take();
        async move {
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or(Err(RequestError::Network("gate dropped".to_owned()))),
                None => Err(RequestError::Network("gate already used".to_owned())),
            }
        }
    }
}

fn answer(text: &str, row_count: i64, sample_size: i64) -> ChatResponse {
    ChatResponse { answer: text.to_owned(), row_count, sample_size, samples: Vec::new(), stats: None }
}

fn panel_with(draft: &str) -> RefCell<PanelState> {
    RefCell::new(PanelState { draft: draft.to_owned(), ..PanelState::default() })
}

fn roles_and_texts(panel: &PanelState) -> Vec<(Role, String)> {
    panel
        .transcript
        .messages()
        .iter()
        .map(|m| (m.role, m.text.clone()))
        .collect()
}

// =============================================================
// begin
// =============================================================

#[test]
fn begin_is_noop_while_in_flight() {
    let mut panel = PanelState { draft: "두 번째 질문".to_owned(), in_flight: true, ..PanelState::default() };
    let begun = begin::<Lodging>(&mut panel, &InputRules::default(), &LodgingForm::default());

    assert!(matches!(begun, Begin::Busy));
    assert_eq!(panel.draft, "두 번째 질문");
    assert!(panel.transcript.is_empty());
}

#[test]
fn begin_ignores_blank_draft_without_touching_it() {
    let mut panel = PanelState { draft: "   ".to_owned(), ..PanelState::default() };
    let begun = begin::<Lodging>(&mut panel, &InputRules::default(), &LodgingForm::default());

    assert!(matches!(begun, Begin::Empty));
    assert_eq!(panel.draft, "   ");
    assert!(!panel.in_flight);
}

#[test]
fn begin_drops_short_and_filler_input_and_clears_draft() {
    for draft in ["줘", "a", " 다줘 ", "나줘", "라"] {
        let mut panel = PanelState { draft: draft.to_owned(), ..PanelState::default() };
        let begun = begin::<Cheap>(&mut panel, &InputRules::default(), &CheapForm::default());

        assert!(matches!(begun, Begin::Dropped), "{draft:?}");
        assert_eq!(panel.draft, "");
        assert!(panel.transcript.is_empty());
        assert!(!panel.in_flight);
    }
}

#[test]
fn begin_renders_question_and_placeholder() {
    let mut panel = PanelState { draft: "  강남역 근처 숙소 ".to_owned(), ..PanelState::default() };
    let Begin::Started(pending) = begin::<Lodging>(&mut panel, &InputRules::default(), &LodgingForm::default())
    else {
        panic!("expected submission to start");
    };

    assert!(panel.in_flight);
    assert_eq!(panel.draft, "");
    assert_eq!(pending.request.question, "강남역 근처 숙소");

    let messages = panel.transcript.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].text, "강남역 근처 숙소");
    assert_eq!(messages[0].meta, None);
    assert_eq!(messages[1].id, pending.placeholder);
    assert_eq!(messages[1].text, PLACEHOLDER_TEXT);
    assert_eq!(messages[1].meta.as_deref(), Some(PLACEHOLDER_META));
    assert_eq!(messages[1].tone, Tone::Loading);
}

#[test]
fn begin_honors_custom_rules() {
    let rules = InputRules { min_chars: 4, stopwords: vec!["추천".to_owned()] };

    let mut panel = PanelState { draft: "숙소요".to_owned(), ..PanelState::default() };
    assert!(matches!(begin::<Lodging>(&mut panel, &rules, &LodgingForm::default()), Begin::Dropped));

    let mut panel = PanelState { draft: "추천".to_owned(), ..PanelState::default() };
    assert!(matches!(begin::<Lodging>(&mut panel, &rules, &LodgingForm::default()), Begin::Dropped));

    let mut panel = PanelState { draft: "줘줘줘줘".to_owned(), ..PanelState::default() };
    assert!(matches!(begin::<Lodging>(&mut panel, &rules, &LodgingForm::default()), Begin::Started(_)));
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_success_replaces_placeholder_with_answer() {
    let mut panel = PanelState { draft: "서울 숙소 현황".to_owned(), ..PanelState::default() };
    let Begin::Started(pending) = begin::<Lodging>(&mut panel, &InputRules::default(), &LodgingForm::default())
    else {
        panic!("expected submission to start");
    };

    let outcome = settle::<Lodging>(&mut panel, pending.placeholder, &Ok(answer("영업 중 숙소가 많습니다.", 12, 5)));

    assert_eq!(outcome, SubmitOutcome::Answered);
    assert!(!panel.in_flight);
    let last = panel.transcript.last().unwrap();
    assert_eq!(last.text, "영업 중 숙소가 많습니다.");
    assert_eq!(last.meta.as_deref(), Some("검색된 행: 12개 · 샘플: 5개"));
    assert_eq!(last.tone, Tone::Normal);
    assert!(panel.transcript.messages().iter().all(|m| m.id != pending.placeholder));
}

#[test]
fn settle_failure_renders_generic_error() {
    let mut panel = PanelState { draft: "김밥집 추천".to_owned(), ..PanelState::default() };
    let Begin::Started(pending) = begin::<Cheap>(&mut panel, &InputRules::default(), &CheapForm::default()) else {
        panic!("expected submission to start");
    };

    let outcome = settle::<Cheap>(&mut panel, pending.placeholder, &Err(RequestError::Status(500)));

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(!panel.in_flight);
    assert_eq!(panel.transcript.len(), 2);
    let last = panel.transcript.last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.text, FAILURE_TEXT);
    assert_eq!(last.meta.as_deref(), Some(FAILURE_META));
    assert_eq!(last.tone, Tone::Error);
}

// =============================================================
// submit
// =============================================================

#[test]
fn lodging_scenario_posts_expected_body_and_renders_meta() {
    let panel = RefCell::new(PanelState {
        draft: "강남역 근처 숙소".to_owned(),
        model: "gpt".to_owned(),
        ..PanelState::default()
    });
    let transport = FakeTransport::replying(Ok(answer("강남구 숙소 안내", 12, 5)));
    let form = LodgingForm { active_only: true, owner_type: String::new(), multi_only: String::new() };

    let outcome = block_on(submit::<Lodging, _, _>(&panel, &transport, &InputRules::default(), &form));

    assert_eq!(outcome, SubmitOutcome::Answered);
    let posted = transport.posted.borrow();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].0, "/lodging/chat");
    assert_eq!(
        posted[0].1,
        serde_json::json!({
            "question": "강남역 근처 숙소",
            "active_only": true,
            "owner_type": null,
            "multi_only": null,
            "model": "gpt",
        })
    );

    let panel = panel.borrow();
    assert_eq!(
        roles_and_texts(&panel),
        vec![(Role::User, "강남역 근처 숙소".to_owned()), (Role::Assistant, "강남구 숙소 안내".to_owned())]
    );
    assert_eq!(panel.transcript.last().unwrap().meta.as_deref(), Some("검색된 행: 12개 · 샘플: 5개"));
    assert!(!panel.in_flight);
}

#[test]
fn cheap_scenario_posts_filters_to_cheap_endpoint() {
    let panel = panel_with("만원 이하 한식");
    let transport = FakeTransport::replying(Ok(answer("세 곳을 추천합니다.", 40, 15)));
    let form = CheapForm {
        sido: "서울특별시".to_owned(),
        sigungu: "마포구".to_owned(),
        category: String::new(),
        max_price: "10000".to_owned(),
    };

    let outcome = block_on(submit::<Cheap, _, _>(&panel, &transport, &InputRules::default(), &form));

    assert_eq!(outcome, SubmitOutcome::Answered);
    let posted = transport.posted.borrow();
    assert_eq!(posted[0].0, "/cheap/chat");
    assert_eq!(
        posted[0].1,
        serde_json::json!({
            "question": "만원 이하 한식",
            "sido": "서울특별시",
            "sigungu": "마포구",
            "category": null,
            "max_price": 10000,
            "model": null,
        })
    );
    assert_eq!(
        panel.borrow().transcript.last().unwrap().meta.as_deref(),
        Some("필터 후 가게 수: 40개 · 샘플: 15개")
    );
}

#[test]
fn filler_input_sends_nothing_and_clears_draft() {
    let panel = panel_with("줘");
    let transport = FakeTransport::default();

    let outcome = block_on(submit::<Lodging, _, _>(&panel, &transport, &InputRules::default(), &LodgingForm::default()));

    assert_eq!(outcome, SubmitOutcome::Dropped);
    assert!(transport.posted.borrow().is_empty());
    assert_eq!(panel.borrow().draft, "");
    assert!(panel.borrow().transcript.is_empty());
}

#[test]
fn network_failure_leaves_one_error_reply_and_idle_panel() {
    let panel = panel_with("부산 숙소 통계");
    let transport = FakeTransport::replying(Err(RequestError::Network("Failed to fetch".to_owned())));

    let outcome = block_on(submit::<Lodging, _, _>(&panel, &transport, &InputRules::default(), &LodgingForm::default()));

    assert_eq!(outcome, SubmitOutcome::Failed);
    let panel = panel.borrow();
    assert!(!panel.in_flight);
    assert_eq!(
        roles_and_texts(&panel),
        vec![(Role::User, "부산 숙소 통계".to_owned()), (Role::Assistant, FAILURE_TEXT.to_owned())]
    );
    assert_eq!(panel.transcript.last().unwrap().meta.as_deref(), Some(FAILURE_META));
}

#[test]
fn each_settled_submit_adds_one_user_and_one_assistant_message() {
    let panel = RefCell::new(PanelState::default());
    let transport = FakeTransport::default();
    transport.replies.borrow_mut().extend([
        Ok(answer("첫 답변", 1, 1)),
        Err(RequestError::Decode("expected value".to_owned())),
        Ok(answer("셋째 답변", 3, 3)),
    ]);

    for (i, question) in ["첫 질문", "둘째 질문", "셋째 질문"].into_iter().enumerate() {
        panel.borrow_mut().draft = question.to_owned();
        block_on(submit::<Cheap, _, _>(&panel, &transport, &InputRules::default(), &CheapForm::default()));

        let state = panel.borrow();
        assert_eq!(state.transcript.len(), (i + 1) * 2);
        assert!(state.transcript.messages().iter().all(|m| m.tone != Tone::Loading));
    }
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let (tx, rx) = oneshot::channel();
    let panel = Rc::new(panel_with("제주 숙소"));
    let transport = Rc::new(GatedTransport { calls: Cell::new(0), gate: RefCell::new(Some(rx)) });

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let first = Rc::new(Cell::new(None));
    {
        let (panel, transport, first) = (panel.clone(), transport.clone(), first.clone());
        spawner
            .spawn_local(async move {
                let outcome =
                    submit::<Lodging, _, _>(&*panel, &*transport, &InputRules::default(), &LodgingForm::default())
                        .await;
                first.set(Some(outcome));
            })
            .unwrap();
    }
    pool.run_until_stalled();

    assert!(panel.borrow().in_flight);
    assert_eq!(transport.calls.get(), 1);
    assert_eq!(panel.borrow().transcript.len(), 2);

    panel.borrow_mut().draft = "제주 숙소 다시".to_owned();
    let second = block_on(submit::<Lodging, _, _>(&*panel, &*transport, &InputRules::default(), &LodgingForm::default()));

    assert_eq!(second, SubmitOutcome::Busy);
    assert_eq!(transport.calls.get(), 1);
    assert_eq!(panel.borrow().transcript.len(), 2);
    assert_eq!(panel.borrow().draft, "제주 숙소 다시");

    tx.send(Ok(answer("제주 숙소 안내", 7, 3))).unwrap();
    pool.run_until_stalled();

    assert_eq!(first.get(), Some(SubmitOutcome::Answered));
    let state = panel.borrow();
    assert!(!state.in_flight);
    assert_eq!(
        roles_and_texts(&state),
        vec![(Role::User, "제주 숙소".to_owned()), (Role::Assistant, "제주 숙소 안내".to_owned())]
    );
}

#[test]
fn panels_do_not_share_in_flight_state() {
    let lodging = RefCell::new(PanelState { in_flight: true, ..PanelState::default() });
    let cheap = panel_with("분식집 추천");
    let transport = FakeTransport::replying(Ok(answer("분식집 목록", 2, 2)));

    let outcome = block_on(submit::<Cheap, _, _>(&cheap, &transport, &InputRules::default(), &CheapForm::default()));

    assert_eq!(outcome, SubmitOutcome::Answered);
    assert!(lodging.borrow().in_flight);
    assert!(!cheap.borrow().in_flight);
}
