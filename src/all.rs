use std::fmt;

use tracing::trace;

use crate::filter::{BoxedFilter, Filter};
use crate::query::Query;
use crate::response::Response;

/// Conjunction over an ordered sequence of filters, with veto semantics.
///
/// A single `Deny` from any child decides the outcome immediately, no
/// matter how many children allowed before it; evaluation short-circuits
/// and the remaining children are not queried. An `Allow` is only
/// provisional, because a later child may still veto, so scanning
/// continues past it. If no child denies, the result is `Allow` when at
/// least one child allowed and `Abstain` when every child abstained.
///
/// This is not boolean AND: in a three-valued algebra the empty case needs
/// its own rule, and an empty `All` (like one whose children all abstain)
/// responds `Abstain`.
///
/// # Example
///
/// ```
/// use sift::{All, Constant, FilterExt};
///
/// let filter = All::new(vec![Constant::ALLOW.boxed(), Constant::DENY.boxed()]);
/// assert!(filter.denies(&"q"));
///
/// let filter = All::new(vec![Constant::ALLOW.boxed(), Constant::ABSTAIN.boxed()]);
/// assert!(filter.allows(&"q"));
/// ```
pub struct All {
    filters: Vec<BoxedFilter>,
}

impl All {
    /// Creates a conjunction of the given filters.
    ///
    /// The sequence is captured as-is and frozen; children are queried in
    /// this order. Order never changes the final response, only how soon a
    /// veto short-circuits.
    pub fn new(filters: Vec<BoxedFilter>) -> Self {
        Self { filters }
    }

    /// Returns the child filters, in evaluation order.
    pub fn filters(&self) -> &[BoxedFilter] {
        &self.filters
    }
}

impl Filter for All {
    fn query(&self, query: &dyn Query) -> Response {
        let mut result = Response::Abstain;
        for filter in &self.filters {
            match filter.query(query) {
                Response::Allow => result = Response::Allow,
                Response::Deny => {
                    trace!("child denied, vetoing conjunction");
                    return Response::Deny;
                }
                Response::Abstain => {}
            }
        }
        trace!(?result, children = self.filters.len(), "conjunction scanned");
        result
    }
}

impl fmt::Debug for All {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("All").field("len", &self.filters.len()).finish()
    }
}
