use std::cell::RefCell;

use super::{Fetcher, Response};

/// Serves a scripted list of responses in order. Once the script is
/// exhausted every further fetch reports a network error.
pub struct MockFetcher {
    script: RefCell<Vec<Response>>,
}

impl Fetcher for MockFetcher {
    fn fetch(&self, _url: &str) -> Response {
        let mut script = self.script.borrow_mut();

        if script.is_empty() {
            Response::network_error()
        } else {
            script.remove(0)
        }
    }
}

impl MockFetcher {
    pub fn new(script: Vec<Response>) -> Self {
        Self {
            script: RefCell::new(script),
        }
    }
}
