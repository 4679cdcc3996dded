use std::fmt;

use tracing::trace;

use crate::filter::{BoxedFilter, Filter};
use crate::query::Query;
use crate::response::Response;

/// Disjunction over an ordered sequence of filters, the dual of
/// [`All`](crate::All).
///
/// The roles of `Allow` and `Deny` swap: a single `Allow` from any child
/// decides the outcome immediately and short-circuits the scan, while a
/// `Deny` is only provisional because a later child may still allow. If no
/// child allows, the result is `Deny` when at least one child denied and
/// `Abstain` when every child abstained. An empty `Any` responds `Abstain`.
///
/// # Example
///
/// ```
/// use sift::{Any, Constant, FilterExt};
///
/// let filter = Any::new(vec![Constant::DENY.boxed(), Constant::ALLOW.boxed()]);
/// assert!(filter.allows(&"q"));
///
/// let filter = Any::new(vec![Constant::DENY.boxed(), Constant::DENY.boxed()]);
/// assert!(filter.denies(&"q"));
/// ```
pub struct Any {
    filters: Vec<BoxedFilter>,
}

impl Any {
    /// Creates a disjunction of the given filters.
    ///
    /// The sequence is captured as-is and frozen; children are queried in
    /// this order. Order never changes the final response, only how soon
    /// an `Allow` short-circuits.
    pub fn new(filters: Vec<BoxedFilter>) -> Self {
        Self { filters }
    }

    /// Returns the child filters, in evaluation order.
    pub fn filters(&self) -> &[BoxedFilter] {
        &self.filters
    }
}

impl Filter for Any {
    fn query(&self, query: &dyn Query) -> Response {
        let mut result = Response::Abstain;
        for filter in &self.filters {
            match filter.query(query) {
                Response::Allow => {
                    trace!("child allowed, deciding disjunction");
                    return Response::Allow;
                }
                Response::Deny => result = Response::Deny,
                Response::Abstain => {}
            }
        }
        trace!(?result, children = self.filters.len(), "disjunction scanned");
        result
    }
}

impl fmt::Debug for Any {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Any").field("len", &self.filters.len()).finish()
    }
}
