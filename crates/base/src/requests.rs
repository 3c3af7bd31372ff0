use crate::requests::api::SyncHttpRequest;
use crate::requests::entities::HttpRequestData;
use anyhow::{Context, Result};

pub mod api;
pub mod entities;
pub mod ureq;

/// Performs a single request without retries. A failure is logged and
/// returned with the name of the requested entity attached.
pub fn http_request(
    req_data: HttpRequestData,
    req_entity_name: &str,
    request_api: &impl SyncHttpRequest,
) -> Result<String> {
    log::debug!("requesting {}: {:?}", req_entity_name, req_data);

    request_api
        .call(req_data)
        .map_err(|e| {
            log::error!("an error occurred on requesting {}: {:?}", req_entity_name, e);
            e
        })
        .context(format!("an error occurred on requesting {}", req_entity_name))
}
