use futures::StreamExt;
use tokio::sync::mpsc::UnboundedSender;
use tokio_tungstenite::tungstenite::Message;
use tracing::{info, warn};
use url::Url;

use super::{Update, parse_sample};
use crate::event::Event;

/// Connects to the streaming endpoint once and forwards each frame in arrival
/// order. No reconnection: once the link drops it stays down and the view
/// keeps whatever was rendered last.
pub fn spawn_stream(url: Url, tx: UnboundedSender<Event>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        info!(%url, "connecting to metrics stream");
        let mut ws = match tokio_tungstenite::connect_async(url.as_str()).await {
            Ok((ws, _response)) => ws,
            Err(e) => {
                warn!(error = %e, "stream connect failed");
                let _ = tx.send(Event::Update(Update::StreamClosed));
                return;
            }
        };

        while let Some(msg) = ws.next().await {
            match msg {
                Ok(Message::Text(text)) => match parse_sample(text.as_str()) {
                    Ok(sample) => {
                        if tx.send(Event::Update(Update::Bars(sample))).is_err() {
                            return;
                        }
                    }
                    // Bad frame: previous render stays, later frames still land.
                    Err(e) => warn!(error = %e, "discarding unparseable frame"),
                },
                Ok(Message::Close(_)) => break,
                // Pings are answered by the library on the next read.
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "stream read failed");
                    break;
                }
            }
        }

        info!("metrics stream closed");
        let _ = tx.send(Event::Update(Update::StreamClosed));
    })
}
