use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::MissedTickBehavior;
use url::Url;

use super::{Update, parse_sample};
use crate::event::Event;

/// Thin wrapper over a shared reqwest client pointed at the metrics endpoint.
#[derive(Clone)]
pub struct MetricsClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl MetricsClient {
    pub fn new(endpoint: Url) -> Self {
        // No request timeout: a stalled response is simply superseded by a
        // later tick's completion.
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Fetch for the raw JSON view: any JSON value, re-emitted pretty-printed
    /// with two-space indentation and stable key order. The status line is
    /// ignored here; only the bar view reacts to non-success statuses.
    pub async fn fetch_raw(&self) -> Update {
        let (_status, body) = match self.request_text().await {
            Ok(parts) => parts,
            Err(e) => return Update::FetchFailed(e.to_string()),
        };
        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => match serde_json::to_string_pretty(&value) {
                Ok(text) => Update::RawJson(text),
                Err(e) => Update::FetchFailed(e.to_string()),
            },
            Err(e) => Update::FetchFailed(e.to_string()),
        }
    }

    /// Fetch for the bar view: a non-success status short-circuits to the
    /// error placeholder without attempting to parse the body.
    pub async fn fetch_bars(&self) -> Update {
        let (status, body) = match self.request_text().await {
            Ok(parts) => parts,
            Err(e) => return Update::FetchFailed(e.to_string()),
        };
        if !status.is_success() {
            return Update::BadStatus(status.as_u16());
        }
        match parse_sample(&body) {
            Ok(sample) => Update::Bars(sample),
            Err(e) => Update::FetchFailed(e.to_string()),
        }
    }

    async fn request_text(&self) -> reqwest::Result<(reqwest::StatusCode, String)> {
        let response = self.http.get(self.endpoint.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }
}

/// Drives a polling view: one fetch spawned per interval tick, fire-and-forget.
/// An in-flight request is never cancelled by the next tick; overlapping
/// completions land unordered and the last one wins the render.
pub fn spawn_poller<F, Fut>(
    period: Duration,
    fetch: F,
    tx: UnboundedSender<Event>,
) -> tokio::task::JoinHandle<()>
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = Update> + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first interval tick completes immediately; consume it so the
        // first fetch happens one full period after startup.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if tx.is_closed() {
                break;
            }
            let fut = fetch();
            let tick_tx = tx.clone();
            tokio::spawn(async move {
                let update = fut.await;
                let _ = tick_tx.send(Event::Update(update));
            });
        }
    })
}
