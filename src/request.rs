use reqwest::{Client, StatusCode};

use crate::Result;

/// Outcome of a single listing page request.
#[derive(Debug)]
pub enum Fetched {
    /// `200 OK` together with the page body.
    Page(String),
    /// Any other status, the partition has no more pages.
    Stop(StatusCode),
}

/// Requests a listing page. Only transport errors are returned as `Err`, a non-200
/// status is a regular [`Fetched::Stop`].
pub async fn request_page_html(client: &Client, url: &str) -> Result<Fetched> {
    let res = client.get(url).send().await?;
    let status = res.status();
    if status != StatusCode::OK {
        return Ok(Fetched::Stop(status));
    }
    let html = res.text().await?;
    Ok(Fetched::Page(html))
}
