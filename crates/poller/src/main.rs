use reviewbot_common::config::AppConfig;
use reviewbot_notifier::TelegramNotifier;
use reviewbot_poller::fetcher::StatusFetcher;
use reviewbot_poller::orchestrator::Orchestrator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reviewbot_poller=info,reviewbot_notifier=info".into()),
        )
        .json()
        .init();

    tracing::info!("ReviewBot starting...");

    // All three secrets are required; refuse to start without them.
    let config = AppConfig::from_env()?;

    let fetcher = StatusFetcher::new(config.endpoint.clone(), &config.practicum_token);
    let notifier = TelegramNotifier::new(config.telegram_token.clone(), config.telegram_chat_id.clone());

    let mut orchestrator = Orchestrator::new(fetcher, notifier, config.poll_interval_secs)
        .with_exit_on_empty(config.exit_on_empty)
        .with_skip_bad_items(config.skip_bad_items);

    // Run with graceful shutdown on Ctrl+C
    tokio::select! {
        result = orchestrator.run() => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Poller exited with error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping gracefully...");
        }
    }

    tracing::info!("ReviewBot stopped.");
    Ok(())
}
