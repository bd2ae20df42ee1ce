use keywarden::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() {
    let (config, keyring) = bootstrap::app::setup();

    let jobs = app::start(&config, keyring).await;

    // handle the signals
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Keywarden shutting down..");

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;
            info!("Keywarden successfully shutdown.");
        }
    }
}
