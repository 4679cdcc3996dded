//! Adapters for building leaf filters without a dedicated type.

use std::fmt;

use crate::filter::Filter;
use crate::query::Query;
use crate::response::Response;

/// Creates a filter from a closure.
///
/// Useful for one-off leaves where a named filter type would be noise.
///
/// # Example
///
/// ```
/// use sift::{FilterExt, Response, filters};
///
/// let positive = filters::from_fn(|query| match query.downcast_ref::<i32>() {
///     Some(n) => Response::from(*n > 0),
///     None => Response::Abstain,
/// });
///
/// assert!(positive.allows(&3));
/// assert!(positive.denies(&-3));
/// assert!(positive.abstains(&"not a number"));
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&dyn Query) -> Response,
{
    FromFn { f }
}

/// A filter backed by a closure. Created by [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> Filter for FromFn<F>
where
    F: Fn(&dyn Query) -> Response,
{
    fn query(&self, query: &dyn Query) -> Response {
        (self.f)(query)
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
