use ureq::Error::Status;

use super::{Fetcher, Response};

use std::io::Read;

/// Plain blocking GET, no custom headers, default redirect handling.
pub struct UreqFetcher;

impl Fetcher for UreqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let response = ureq::request("GET", url).call();

        match response {
            Ok(response) => {
                let body = response
                    .into_reader()
                    .bytes()
                    .collect::<Result<Vec<u8>, _>>();

                match body {
                    Ok(body) => Response::ok(body),
                    Err(_) => Response::invalid_body(),
                }
            }

            Err(Status(code, _)) => Response::http_status(code),

            Err(_) => Response::network_error(),
        }
    }
}

impl UreqFetcher {
    pub fn new() -> Self {
        UreqFetcher
    }
}

impl Default for UreqFetcher {
    fn default() -> Self {
        Self::new()
    }
}
