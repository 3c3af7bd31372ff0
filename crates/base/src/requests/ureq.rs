use crate::requests::api::SyncHttpRequest;
use crate::requests::entities::HttpRequestData;
use anyhow::{bail, Result};
use ureq::Error;

#[derive(Default)]
pub struct UreqRequestApi {}

impl UreqRequestApi {
    pub fn new() -> Self {
        Default::default()
    }
}

impl SyncHttpRequest for UreqRequestApi {
    fn call(&self, req: HttpRequestData) -> Result<String> {
        let mut request = ureq::get(&req.url);

        if let Some(queries) = &req.queries {
            for (param, value) in queries {
                request = request.query(param, value);
            }
        }

        match request.call() {
            Ok(resp) => Ok(resp.into_string()?),
            Err(e) => match e {
                Error::Status(code, resp) => {
                    bail!(
                        "request to {} failed with a code {}: {}",
                        resp.get_url().to_string(),
                        code,
                        resp.into_string()?
                    );
                }
                e => bail!(e),
            },
        }
    }
}
