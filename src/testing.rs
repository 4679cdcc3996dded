//! Leaf filters shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::filter::Filter;
use crate::query::Query;
use crate::response::Response;

/// Allows an `i32` query equal to the held value, denies any other `i32`,
/// and abstains from everything else.
#[derive(Debug)]
pub(crate) struct Equals(pub(crate) i32);

impl Filter for Equals {
    fn query(&self, query: &dyn Query) -> Response {
        match query.downcast_ref::<i32>() {
            Some(n) => Response::from(*n == self.0),
            None => Response::Abstain,
        }
    }
}

/// Allows an `i32` query strictly above the held value.
#[derive(Debug)]
pub(crate) struct Above(pub(crate) i32);

impl Filter for Above {
    fn query(&self, query: &dyn Query) -> Response {
        match query.downcast_ref::<i32>() {
            Some(n) => Response::from(*n > self.0),
            None => Response::Abstain,
        }
    }
}

/// Allows an `i32` query strictly below the held value.
#[derive(Debug)]
pub(crate) struct Below(pub(crate) i32);

impl Filter for Below {
    fn query(&self, query: &dyn Query) -> Response {
        match query.downcast_ref::<i32>() {
            Some(n) => Response::from(*n < self.0),
            None => Response::Abstain,
        }
    }
}

/// Gives a fixed response and counts how often it was queried, for
/// observing short-circuit behavior. Share it via `Arc` to keep a handle
/// on the counter after handing the filter to a composite.
#[derive(Debug)]
pub(crate) struct Counting {
    response: Response,
    calls: AtomicUsize,
}

impl Counting {
    pub(crate) fn new(response: Response) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Filter for Counting {
    fn query(&self, _query: &dyn Query) -> Response {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.response
    }
}
