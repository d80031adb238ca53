//! Response status handling shared by every read API call.

use crate::error::ClientError;

/// Pass successful responses through and turn everything else into an error.
///
/// - **429** → [`ClientError::RateLimited`], honoring `Retry-After` seconds
///   (60 s when missing or unparseable).
/// - **other non-2xx** → [`ClientError::Api`] carrying the response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(ClientError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        });
    }
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read a successful response body as JSON.
pub async fn read_json(resp: reqwest::Response) -> Result<serde_json::Value, ClientError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(60)
}
