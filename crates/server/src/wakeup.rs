use std::time::Duration;

use tokio::{task::JoinHandle, time};
use tracing::{debug, info, warn};

use crate::config::Wakeup;

const FIRST_PING_DELAY: Duration = Duration::from_secs(5);

/// Keeps an idle deployment warm by pinging `wakeup.target` forever.
pub fn spawn(wakeup: Wakeup) -> JoinHandle<()> {
    info!(
        "Wakeup enabled, pinging {} every {:?}",
        wakeup.target, wakeup.interval
    );
    tokio::spawn(async move {
        let client = reqwest::Client::new();
        let mut interval =
            time::interval_at(time::Instant::now() + wakeup.interval, wakeup.interval);
        time::sleep(FIRST_PING_DELAY).await;
        ping(&client, &wakeup.target).await;
        loop {
            interval.tick().await;
            ping(&client, &wakeup.target).await;
        }
    })
}

async fn ping(client: &reqwest::Client, target: &str) {
    match client.get(target).send().await {
        Ok(response) => debug!("Wakeup ping to {target}: {}", response.status()),
        Err(err) => warn!("Wakeup ping to {target} failed: {err}"),
    }
}
