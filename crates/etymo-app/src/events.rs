use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};

use etymo_core::provider::DatasetProvider;
use etymo_core::{QueryController, SuggestionEngine};
use etymo_types::{AppEvent, UiEvent};

use crate::state::AppState;

/// App's main loop: one event at a time, so renders never interleave.
pub async fn event_loop(
    state: Arc<AppState>,
    provider: Arc<dyn DatasetProvider>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<UiEvent>,
) -> anyhow::Result<()> {
    let (suggest_limit, example_limit) = {
        let config = state.config.read().await;
        (config.lookup.suggest_limit, config.lookup.example_limit)
    };

    let mut controller = QueryController::new(provider.clone());
    let engine = SuggestionEngine::new(provider.clone(), suggest_limit);

    // word-count banner, best effort
    match provider.word_count().await {
        Ok(count) => app_to_ui_tx.send(UiEvent::WordCount(count)).await?,
        Err(err) => tracing::warn!("word count unavailable: {}", err),
    }

    loop {
        let event = ui_to_app_rx.recv().await?;
        match event {
            AppEvent::Shutdown => {
                tracing::info!("event loop stopping");
                break;
            }
            AppEvent::InputChanged(raw) => {
                handle_input_changed(&engine, &raw, &app_to_ui_tx).await?;
            }
            AppEvent::SubmitWord(raw) => {
                handle_submit(&mut controller, example_limit, &raw, &app_to_ui_tx).await?;
            }
        }
    }

    Ok(())
}

async fn handle_input_changed(
    engine: &SuggestionEngine<dyn DatasetProvider>,
    raw: &str,
    app_to_ui_tx: &AsyncSender<UiEvent>,
) -> anyhow::Result<()> {
    match engine.on_input(raw).await {
        // response went stale while in flight, drop it
        None => Ok(()),
        Some(words) if words.is_empty() => {
            app_to_ui_tx.send(UiEvent::HideSuggestions).await?;
            Ok(())
        }
        Some(words) => {
            app_to_ui_tx.send(UiEvent::Suggestions(words)).await?;
            Ok(())
        }
    }
}

async fn handle_submit(
    controller: &mut QueryController<dyn DatasetProvider>,
    example_limit: usize,
    raw: &str,
    app_to_ui_tx: &AsyncSender<UiEvent>,
) -> anyhow::Result<()> {
    // empty input: no transition, nothing rendered
    let Some((word, loading)) = controller.begin(raw) else {
        return Ok(());
    };
    app_to_ui_tx.send(UiEvent::Render(loading)).await?;

    let regions = controller.resolve(&word).await;
    app_to_ui_tx.send(UiEvent::Render(regions)).await?;

    // per-affix example sections follow the main render, one fetch
    // each, appended as they resolve
    let parts = controller.affix_parts();
    if parts.is_empty() {
        return Ok(());
    }
    for part in parts {
        let examples = controller.fetch_examples(&part, example_limit).await;
        if !examples.is_empty() {
            app_to_ui_tx
                .send(UiEvent::ExampleSection { part, examples })
                .await?;
        }
    }
    app_to_ui_tx.send(UiEvent::ExamplesDone).await?;

    Ok(())
}
