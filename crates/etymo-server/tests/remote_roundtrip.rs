//! End-to-end check of the remote variant: the HTTP client provider
//! against a live in-process backend over the in-memory dataset.

use std::collections::BTreeMap;
use std::sync::Arc;

use etymo_client::RemoteProvider;
use etymo_core::ProviderError;
use etymo_core::provider::DatasetProvider;
use etymo_dataset::MemoryProvider;
use etymo_server::{ServerState, build_router};
use etymo_types::{AffixEntry, AffixKind, AffixNote, WordRecord};
use tokio::net::TcpListener;

fn dataset() -> MemoryProvider {
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

    let mut prefixes = BTreeMap::new();
    prefixes.insert(
        "un-".to_string(),
        AffixEntry {
            meaning: "not".to_string(),
            examples: Vec::new(),
        },
    );

    MemoryProvider::from_parts(words, prefixes, BTreeMap::new())
}

async fn spawn_backend() -> RemoteProvider {
    let state = Arc::new(ServerState {
        provider: Arc::new(dataset()),
        suggest_limit: 5,
        example_limit: 5,
    });
    let router = build_router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    RemoteProvider::new(format!("http://{}", addr))
}

#[tokio::test]
async fn word_round_trips_through_http() {
    let provider = spawn_backend().await;

    let record = provider.word("Unique").await.unwrap();
    assert_eq!(record.translation, "独特的");
    assert_eq!(record.meanings, vec!["独特的", "唯一的"]);
    assert_eq!(record.affix_analysis[0].part, "uni-");
}

#[tokio::test]
async fn miss_maps_to_not_found() {
    let provider = spawn_backend().await;

    let err = provider.word("zzznoword").await.unwrap_err();
    assert!(matches!(err, ProviderError::NotFound(_)));
}

#[tokio::test]
async fn suggestions_and_count_round_trip() {
    let provider = spawn_backend().await;

    let words = provider.suggest("un", 5).await.unwrap();
    assert_eq!(words, vec!["unable", "under", "union", "unique", "untie"]);

    assert_eq!(provider.word_count().await.unwrap(), 6);
}

#[tokio::test]
async fn affix_examples_survive_path_encoding() {
    let provider = spawn_backend().await;

    // "uni-" goes out percent-encoded and comes back matched
    let examples = provider.affix_examples("uni-", 5).await.unwrap();
    assert_eq!(examples, vec!["union", "unique"]);
}

#[tokio::test]
async fn analyze_round_trips() {
    let provider = spawn_backend().await;

    let breakdown = provider.analyze("unable").await.unwrap();
    assert_eq!(breakdown.prefix.unwrap().affix, "un-");
    assert!(breakdown.root.is_none());
}
