// src/core/net.rs
// Blocking HTTP GET helpers. One request per call, fixed timeout, no retries.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::QueryFailure;

/// Build the shared client. Every request made through it times out after `timeout`.
pub fn client(timeout: Duration) -> Result<Client, QueryFailure> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(QueryFailure::Client)
}

/// GET `url?query` and decode the JSON body into `T`.
pub fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T, QueryFailure> {
    debug!(url, ?query, "GET json");
    let resp = client.get(url).query(query).send()?;
    let body = check_status(resp)?.text()?;
    Ok(serde_json::from_str(&body)?)
}

/// GET `url` with an explicit `Accept` header and return the raw body.
pub fn get_text(client: &Client, url: &str, accept: &str) -> Result<String, QueryFailure> {
    debug!(url, accept, "GET text");
    let resp = client.get(url).header(ACCEPT, accept).send()?;
    Ok(check_status(resp)?.text()?)
}

fn check_status(resp: Response) -> Result<Response, QueryFailure> {
    let status = resp.status();
    if !status.is_success() {
        return Err(QueryFailure::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp)
}
