use cambio_core::{CambioError, HttpProviderConfig};
use serde::de::DeserializeOwned;
use url::Url;

/// Build the shared `reqwest::Client` used by one provider.
pub(crate) fn build_client(
    name: &'static str,
    cfg: &HttpProviderConfig,
) -> Result<reqwest::Client, CambioError> {
    reqwest::Client::builder()
        .timeout(cfg.timeout)
        .user_agent(concat!("cambio/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| CambioError::connector(name, format!("http client: {e}")))
}

/// Parse the configured base URL, rejecting anything that cannot carry a path.
pub(crate) fn parse_base_url(name: &'static str, raw: &str) -> Result<Url, CambioError> {
    let url = Url::parse(raw)
        .map_err(|e| CambioError::invalid_arg(format!("{name} base url '{raw}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(CambioError::invalid_arg(format!(
            "{name} base url '{raw}' cannot be a base"
        )));
    }
    Ok(url)
}

/// Append path segments to `base` without dropping any path it already has.
pub(crate) fn join_path(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// GET `url` and decode a JSON body. Non-2xx statuses are failures.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    name: &'static str,
    url: Url,
) -> Result<T, CambioError> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| CambioError::connector(name, format!("request failed: {e}")))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(CambioError::connector(
            name,
            format!("upstream returned status {status}"),
        ));
    }
    resp.json::<T>()
        .await
        .map_err(|e| CambioError::connector(name, format!("malformed body: {e}")))
}

/// Split a comma-separated filter into trimmed, uppercased, non-empty codes.
///
/// Returns `None` when the filter is absent or contains no codes.
pub(crate) fn parse_symbols(symbols: Option<&str>) -> Option<Vec<String>> {
    let codes: Vec<String> = symbols?
        .split(',')
        .map(|s| s.trim().to_ascii_uppercase())
        .filter(|s| !s.is_empty())
        .collect();
    (!codes.is_empty()).then_some(codes)
}
