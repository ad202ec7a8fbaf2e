//! Byte-level resource fetching with advisory progress reporting.
//!
//! Progress callbacks receive (bytes so far, total if known). Totals are
//! only available when the transport reports a Content-Length.

/// Fetches a resource on the web build, streaming the body so progress can
/// be reported chunk by chunk. Relative URLs resolve against the page.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_bytes(
    url: &str,
    mut on_progress: impl FnMut(u64, Option<u64>),
) -> Result<Vec<u8>, String> {
    use futures_util::StreamExt;

    let resolved = resolve_url(url)?;
    let response = reqwest::Client::new()
        .get(resolved)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP error {} fetching {}", status.as_u16(), url));
    }

    let total = response.content_length();
    let mut stream = response.bytes_stream();
    let mut data = Vec::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| format!("Read failed: {}", e))?;
        data.extend_from_slice(&chunk);
        on_progress(data.len() as u64, total);
    }

    Ok(data)
}

#[cfg(target_arch = "wasm32")]
fn resolve_url(url: &str) -> Result<reqwest::Url, String> {
    if let Ok(absolute) = reqwest::Url::parse(url) {
        return Ok(absolute);
    }

    let href = web_sys::window()
        .ok_or_else(|| "No window".to_string())?
        .location()
        .href()
        .map_err(|_| "No location".to_string())?;
    let base =
        reqwest::Url::parse(&href).map_err(|e| format!("Bad base URL \"{}\": {}", href, e))?;
    base.join(url)
        .map_err(|e| format!("Bad URL \"{}\": {}", url, e))
}

/// Fetches a resource natively. HTTP(S) URLs go over the network in
/// chunked reads; anything else is treated as a local path, which serves
/// native development runs against the same relative configuration.
#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_bytes_blocking(
    url: &str,
    mut on_progress: impl FnMut(u64, Option<u64>),
) -> Result<Vec<u8>, String> {
    use std::io::Read;

    if !url.starts_with("http://") && !url.starts_with("https://") {
        let path = url.strip_prefix("./").unwrap_or(url);
        let data =
            std::fs::read(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
        on_progress(data.len() as u64, Some(data.len() as u64));
        return Ok(data);
    }

    let mut response =
        reqwest::blocking::get(url).map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP error {} fetching {}", status.as_u16(), url));
    }

    let total = response.content_length();
    let mut data = Vec::new();
    let mut buf = [0u8; 64 * 1024];

    loop {
        let n = response
            .read(&mut buf)
            .map_err(|e| format!("Read failed: {}", e))?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
        on_progress(data.len() as u64, total);
    }

    Ok(data)
}
