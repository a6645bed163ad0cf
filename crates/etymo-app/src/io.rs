use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use etymo_types::AppEvent;

/// Reads stdin lines and publishes them as app events: a plain line is
/// a lookup, `?prefix` asks for suggestions, `:q` (or EOF) quits.
pub async fn input_io(
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("input loop stopping");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    event_tx.send(AppEvent::Shutdown).await?;
                    break;
                };

                let trimmed = line.trim();
                if trimmed == ":q" {
                    event_tx.send(AppEvent::Shutdown).await?;
                    break;
                }
                if let Some(prefix) = trimmed.strip_prefix('?') {
                    event_tx.send(AppEvent::InputChanged(prefix.to_string())).await?;
                } else {
                    event_tx.send(AppEvent::SubmitWord(line)).await?;
                }
            }
        }
    }

    Ok(())
}
