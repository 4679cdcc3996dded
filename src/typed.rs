use std::any::Any;

use crate::filter::Filter;
use crate::query::Query;
use crate::response::Response;

/// A filter that only understands queries of one specific type.
///
/// Implementors name the payload type they accept as [`TypedFilter::Query`]
/// and write their logic in [`typed_query`](TypedFilter::typed_query)
/// against that type directly, with no downcasting of their own. Wrap the
/// filter in [`Typed`] to use it where a [`Filter`] is expected: queries of
/// any other type produce `Abstain` without the typed logic ever running.
///
/// This is what lets heterogeneous filter trees mix filters for different
/// query shapes, where a filter handed a query it does not understand is
/// silently indifferent rather than an error.
///
/// # Example
///
/// ```
/// use sift::{FilterExt, Response, Typed, TypedFilter};
///
/// struct Login {
///     user: String,
/// }
///
/// struct RootOnly;
///
/// impl TypedFilter for RootOnly {
///     type Query = Login;
///
///     fn typed_query(&self, login: &Login) -> Response {
///         Response::from(login.user == "root")
///     }
/// }
///
/// let filter = Typed::new(RootOnly);
/// assert!(filter.allows(&Login { user: "root".to_string() }));
/// assert!(filter.denies(&Login { user: "mallory".to_string() }));
/// assert!(filter.abstains(&"not a login"));
/// ```
pub trait TypedFilter {
    /// The query type this filter understands.
    type Query: Any;

    /// Queries this filter with an already-narrowed query.
    fn typed_query(&self, query: &Self::Query) -> Response;
}

/// Adapts a [`TypedFilter`] into a [`Filter`] over arbitrary queries.
///
/// The guard and the narrowing are one and the same downcast, so they
/// cannot disagree: whenever [`queryable_with`](Typed::queryable_with)
/// returns `true`, narrowing succeeds and the typed logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Typed<F> {
    filter: F,
}

impl<F: TypedFilter> Typed<F> {
    /// Wraps a typed filter.
    pub fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Returns the wrapped typed filter.
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Returns `true` if the wrapped filter accepts this query's type.
    pub fn queryable_with(&self, query: &dyn Query) -> bool {
        query.is::<F::Query>()
    }
}

impl<F: TypedFilter> Filter for Typed<F> {
    fn query(&self, query: &dyn Query) -> Response {
        match query.downcast_ref::<F::Query>() {
            Some(query) => self.filter.typed_query(query),
            None => Response::Abstain,
        }
    }
}
