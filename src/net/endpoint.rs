use color_eyre::Result;
use color_eyre::eyre::eyre;
use url::Url;

pub const API_PATH: &str = "/api/cpus/json";
pub const WS_PATH: &str = "/ws/cpus/json";

/// Metrics endpoint for the polling views, on the configured server.
pub fn api_endpoint(server: &Url) -> Result<Url> {
    Ok(server.join(API_PATH)?)
}

/// Streaming endpoint derived from the server URL: same host and port,
/// scheme upgraded to its streaming equivalent.
pub fn ws_endpoint(server: &Url) -> Result<Url> {
    let mut url = server.join(WS_PATH)?;
    let scheme = match server.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => return Err(eyre!("unsupported server scheme `{other}`")),
    };
    url.set_scheme(scheme)
        .map_err(|_| eyre!("cannot set scheme `{scheme}` on {server}"))?;
    Ok(url)
}
