use std::sync::{Arc, Mutex};
use std::time::Duration;

use dojang_config::Config;
use dojang_core::index::TermIndex;
use dojang_types::{AppEvent, TermRow, UiEvent};
use kanal::AsyncReceiver;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::audio::AudioSink;
use crate::events::event_loop;
use crate::state::AppState;

const GLOSSARY: &str = r#"{
    "categories": ["Strikes", "Blocks", "Kicks"],
    "terms": [
        {
            "id": "t1",
            "englishName": "Punch",
            "koreanName": "지르기",
            "romanized": "Jireugi",
            "sound": "/audio/t1.mp3",
            "beltLearnt": "White",
            "meaning": "a straight punch",
            "category": "Strikes"
        },
        {
            "id": "t2",
            "englishName": "Block",
            "koreanName": "막기",
            "romanized": "Makgi",
            "sound": "/audio/t2.mp3",
            "beltLearnt": "Yellow",
            "meaning": "a block",
            "category": "Blocks"
        },
        {
            "id": "t3",
            "englishName": "Front Kick",
            "koreanName": "앞차기",
            "romanized": "Ap Chagi",
            "sound": "/audio/t3.mp3",
            "beltLearnt": "White",
            "meaning": "a front kick",
            "category": "Kicks"
        }
    ]
}"#;

struct RecordingSink {
    played: Mutex<Vec<String>>,
}

impl RecordingSink {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            played: Mutex::new(Vec::new()),
        })
    }
}

impl AudioSink for RecordingSink {
    fn play(&self, uri: &str) {
        self.played.lock().unwrap().push(uri.to_string());
    }
}

fn test_state(debounce_ms: u64) -> Arc<AppState> {
    let mut config = Config::default();
    config.search.debounce_ms = debounce_ms;
    let index = TermIndex::from_json(GLOSSARY).expect("test glossary parses");
    Arc::new(AppState::new(config, index))
}

async fn recv_results(rx: &AsyncReceiver<AppEvent>) -> Vec<TermRow> {
    loop {
        let event = timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timed out waiting for results")
            .expect("channel closed");
        if let AppEvent::ShowResults(rows) = event {
            return rows;
        }
    }
}

#[tokio::test]
async fn submit_runs_the_query_and_ships_results() {
    let state = test_state(10);
    let sink = RecordingSink::new();
    let (ui_tx, ui_rx) = kanal::bounded_async::<AppEvent>(64);
    let (app_tx, app_rx) = kanal::bounded_async::<AppEvent>(64);

    let handle = tokio::spawn(event_loop(
        state,
        ui_rx,
        app_tx,
        sink,
        CancellationToken::new(),
    ));

    // the loop announces the full listing first
    let initial = recv_results(&app_rx).await;
    assert_eq!(initial.len(), 3);

    ui_tx
        .send(AppEvent::SearchInput("punch".to_string()))
        .await
        .unwrap();
    ui_tx.send(AppEvent::SubmitSearch).await.unwrap();

    let rows = recv_results(&app_rx).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].english_name, "Punch");

    ui_tx
        .send(AppEvent::UiEvent(UiEvent::Close))
        .await
        .unwrap();
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn unsubmitted_input_applies_after_the_quiet_interval() {
    let state = test_state(20);
    let sink = RecordingSink::new();
    let (ui_tx, ui_rx) = kanal::bounded_async::<AppEvent>(64);
    let (app_tx, app_rx) = kanal::bounded_async::<AppEvent>(64);

    let handle = tokio::spawn(event_loop(
        state,
        ui_rx,
        app_tx,
        sink,
        CancellationToken::new(),
    ));

    let initial = recv_results(&app_rx).await;
    assert_eq!(initial.len(), 3);

    // keystrokes only, no submit; the debouncer must release on its own
    ui_tx
        .send(AppEvent::SearchInput("w".to_string()))
        .await
        .unwrap();
    ui_tx
        .send(AppEvent::SearchInput("white".to_string()))
        .await
        .unwrap();

    let rows = recv_results(&app_rx).await;
    let names: Vec<&str> = rows.iter().map(|r| r.english_name.as_str()).collect();
    assert_eq!(names, ["Punch", "Front Kick"]);

    ui_tx
        .send(AppEvent::UiEvent(UiEvent::Close))
        .await
        .unwrap();
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn category_selection_narrows_and_audio_dispatches() {
    let state = test_state(10);
    let sink = RecordingSink::new();
    let (ui_tx, ui_rx) = kanal::bounded_async::<AppEvent>(64);
    let (app_tx, app_rx) = kanal::bounded_async::<AppEvent>(64);

    let handle = tokio::spawn(event_loop(
        state,
        ui_rx,
        app_tx,
        sink.clone(),
        CancellationToken::new(),
    ));

    let _initial = recv_results(&app_rx).await;

    ui_tx
        .send(AppEvent::CategorySelected("Kicks".to_string()))
        .await
        .unwrap();
    let rows = recv_results(&app_rx).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, "Kicks");

    ui_tx
        .send(AppEvent::PlayAudio {
            term_id: rows[0].id.clone(),
        })
        .await
        .unwrap();

    // close makes the loop drain the play request before exiting
    ui_tx
        .send(AppEvent::UiEvent(UiEvent::Close))
        .await
        .unwrap();
    handle.await.unwrap().unwrap();

    let played = sink.played.lock().unwrap();
    assert_eq!(played.as_slice(), ["/audio/t3.mp3"]);
}

#[tokio::test]
async fn cancellation_stops_the_loop() {
    let state = test_state(10);
    let sink = RecordingSink::new();
    let (_ui_tx, ui_rx) = kanal::bounded_async::<AppEvent>(64);
    let (app_tx, app_rx) = kanal::bounded_async::<AppEvent>(64);
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(event_loop(state, ui_rx, app_tx, sink, cancel.clone()));

    let _initial = recv_results(&app_rx).await;
    cancel.cancel();

    let result = timeout(Duration::from_secs(2), handle)
        .await
        .expect("loop did not stop on cancellation");
    result.unwrap().unwrap();
}
