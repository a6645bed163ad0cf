use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncReceiver;
use tokio::time::timeout;

use etymo_config::Config;
use etymo_core::view;
use etymo_dataset::MemoryProvider;
use etymo_types::{AffixKind, AffixNote, AppEvent, UiEvent, WordRecord};

use crate::events::event_loop;
use crate::state::AppState;

fn provider() -> MemoryProvider {
    let mut words = BTreeMap::new();
    words.insert(
        "unique".to_string(),
        WordRecord {
            translation: "独特的".to_string(),
            phonetic: Some("/juːˈniːk/".to_string()),
            word_class: "adj.".to_string(),
            meanings: vec!["独特的".to_string(), "唯一的".to_string()],
            affix_analysis: vec![AffixNote {
                kind: AffixKind::Prefix,
                part: "uni-".to_string(),
                meaning: "one".to_string(),
            }],
            similar_words: Vec::new(),
        },
    );
    for word in ["under", "unable", "union", "untie", "uphold"] {
        words.insert(
            word.to_string(),
            WordRecord {
                translation: "词".to_string(),
                phonetic: None,
                word_class: "n.".to_string(),
                meanings: Vec::new(),
                affix_analysis: Vec::new(),
                similar_words: Vec::new(),
            },
        );
    }
    MemoryProvider::from_parts(words, BTreeMap::new(), BTreeMap::new())
}

struct Harness {
    to_app: kanal::AsyncSender<AppEvent>,
    from_app: AsyncReceiver<UiEvent>,
}

fn spawn_loop() -> Harness {
    let (to_app, app_rx) = kanal::bounded_async(64);
    let (ui_tx, from_app) = kanal::bounded_async(64);
    let state = Arc::new(AppState::new(Config::new()));

    tokio::spawn(event_loop(state, Arc::new(provider()), app_rx, ui_tx));

    Harness { to_app, from_app }
}

async fn recv(rx: &AsyncReceiver<UiEvent>) -> UiEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for ui event")
        .expect("channel closed")
}

#[tokio::test]
async fn startup_reports_the_word_count() {
    let harness = spawn_loop();
    match recv(&harness.from_app).await {
        UiEvent::WordCount(count) => assert_eq!(count, 6),
        other => panic!("expected word count, got {:?}", other),
    }
}

#[tokio::test]
async fn submit_renders_loading_then_populated_then_examples() {
    let harness = spawn_loop();
    recv(&harness.from_app).await; // word-count banner

    harness
        .to_app
        .send(AppEvent::SubmitWord("Unique".to_string()))
        .await
        .unwrap();

    let UiEvent::Render(loading) = recv(&harness.from_app).await else {
        panic!("expected loading render");
    };
    assert_eq!(loading.translation, view::LABEL_QUERYING);

    let UiEvent::Render(populated) = recv(&harness.from_app).await else {
        panic!("expected populated render");
    };
    assert_eq!(populated.translation, "独特的");
    assert_eq!(populated.meanings, vec!["独特的", "唯一的"]);
    assert!(populated.affix_examples.is_empty());

    let UiEvent::ExampleSection { part, examples } = recv(&harness.from_app).await else {
        panic!("expected example section");
    };
    assert_eq!(part, "uni-");
    assert_eq!(examples, vec!["union", "unique"]);

    assert!(matches!(recv(&harness.from_app).await, UiEvent::ExamplesDone));
}

#[tokio::test]
async fn unknown_word_renders_an_error_without_example_fetches() {
    let harness = spawn_loop();
    recv(&harness.from_app).await;

    harness
        .to_app
        .send(AppEvent::SubmitWord("zzznoword".to_string()))
        .await
        .unwrap();

    recv(&harness.from_app).await; // loading
    let UiEvent::Render(regions) = recv(&harness.from_app).await else {
        panic!("expected error render");
    };
    assert_eq!(regions.translation, view::LABEL_FAILED);
    assert_eq!(regions.affix_analysis, vec![view::MSG_NOT_FOUND.to_string()]);

    // no affix parts, so the next event must come from a new input
    harness
        .to_app
        .send(AppEvent::InputChanged("un".to_string()))
        .await
        .unwrap();
    assert!(matches!(
        recv(&harness.from_app).await,
        UiEvent::Suggestions(_)
    ));
}

#[tokio::test]
async fn empty_submit_is_a_no_op() {
    let harness = spawn_loop();
    recv(&harness.from_app).await;

    harness
        .to_app
        .send(AppEvent::SubmitWord("   ".to_string()))
        .await
        .unwrap();

    // the very next ui event comes from the suggestion query, not a render
    harness
        .to_app
        .send(AppEvent::InputChanged("un".to_string()))
        .await
        .unwrap();
    let UiEvent::Suggestions(words) = recv(&harness.from_app).await else {
        panic!("expected suggestions, the empty submit must not render");
    };
    assert_eq!(words, vec!["unable", "under", "union", "unique", "untie"]);
}

#[tokio::test]
async fn clearing_the_input_hides_suggestions() {
    let harness = spawn_loop();
    recv(&harness.from_app).await;

    harness
        .to_app
        .send(AppEvent::InputChanged(String::new()))
        .await
        .unwrap();
    assert!(matches!(
        recv(&harness.from_app).await,
        UiEvent::HideSuggestions
    ));
}
