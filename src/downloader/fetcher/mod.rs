mod ureq_fetcher;

pub use ureq_fetcher::UreqFetcher;

#[cfg(test)]
mod mock_fetcher;

#[cfg(test)]
pub use mock_fetcher::MockFetcher;

/// Outcome of a single HTTP GET, before anything touches the filesystem.
#[derive(Debug)]
pub enum Response {
    Ok(Vec<u8>),
    HttpStatus(u16),
    NetworkError,
    InvalidBody,
}

impl Response {
    pub fn ok(body: Vec<u8>) -> Self {
        Self::Ok(body)
    }

    pub fn http_status(code: u16) -> Self {
        Self::HttpStatus(code)
    }

    pub fn network_error() -> Self {
        Self::NetworkError
    }

    pub fn invalid_body() -> Self {
        Self::InvalidBody
    }
}

pub trait Fetcher {
    fn fetch(&self, url: &str) -> Response;
}
