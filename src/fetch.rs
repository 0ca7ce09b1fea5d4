use std::time::Duration;

use serde::Deserialize;
use ureq::Agent;

use crate::consts::SELECT_FIELDS;
use crate::error::FetchError;
use crate::launch::LaunchRecord;

/// Paginated wrapper around the query endpoint's response. Only `docs`
/// matters here; a missing key reads as an empty page.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    docs: Vec<LaunchRecord>,
}

/// One POST to the launches-query endpoint: empty filter, fixed field
/// selection, newest first. Returns whatever page the server sends back,
/// with no follow-up pagination.
pub(crate) fn fetch_launches(
    api_url: &str,
    limit: u32,
    timeout: Duration,
) -> Result<Vec<LaunchRecord>, FetchError> {
    println!("Connecting to the SpaceX API...");
    let agent: Agent = Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into();

    let payload = serde_json::json!({
        "query": {},
        "options": {
            "select": SELECT_FIELDS,
            "limit": limit,
            "sort": { "date_utc": "desc" },
        },
    });

    println!("Sending request to the SpaceX server...");
    let mut response = agent.post(api_url).send_json(&payload)?;

    let status = response.status().as_u16();
    if status != 200 {
        let body = response.body_mut().read_to_string().unwrap_or_default();
        return Err(FetchError::Remote { status, body });
    }

    let parsed: QueryResponse = response.body_mut().read_json()?;
    println!("Data received successfully!");
    Ok(parsed.docs)
}
