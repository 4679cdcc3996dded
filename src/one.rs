use std::fmt;

use tracing::trace;

use crate::filter::{BoxedFilter, Filter};
use crate::query::Query;
use crate::response::Response;

/// The exactly-one quantifier: allows when precisely one child allows.
///
/// The policy is:
///
/// - exactly one child responds `Allow`: the result is `Allow`;
/// - two or more children respond `Allow`: the result is `Deny`, decided
///   the instant the second `Allow` is observed (the rest of the sequence
///   is not queried);
/// - no child responds `Allow`: the result is `Abstain`, since nobody
///   endorsed the query, which is the same silence an empty
///   [`All`](crate::All) or [`Any`](crate::Any) propagates.
///
/// Unlike in `All` and `Any`, a child's `Deny` carries no veto weight
/// here: only `Allow` responses are counted, and `Deny` and `Abstain`
/// children are treated alike. An empty `One` responds `Abstain`.
///
/// # Example
///
/// ```
/// use sift::{Constant, FilterExt, One};
///
/// let filter = One::new(vec![Constant::ALLOW.boxed(), Constant::DENY.boxed()]);
/// assert!(filter.allows(&"q"));
///
/// let filter = One::new(vec![Constant::ALLOW.boxed(), Constant::ALLOW.boxed()]);
/// assert!(filter.denies(&"q"));
/// ```
pub struct One {
    filters: Vec<BoxedFilter>,
}

impl One {
    /// Creates an exactly-one quantifier over the given filters.
    ///
    /// The sequence is captured as-is and frozen; children are queried in
    /// this order.
    pub fn new(filters: Vec<BoxedFilter>) -> Self {
        Self { filters }
    }

    /// Returns the child filters, in evaluation order.
    pub fn filters(&self) -> &[BoxedFilter] {
        &self.filters
    }
}

impl Filter for One {
    fn query(&self, query: &dyn Query) -> Response {
        let mut allowed = false;
        for filter in &self.filters {
            if filter.query(query) == Response::Allow {
                if allowed {
                    trace!("second child allowed, denying");
                    return Response::Deny;
                }
                allowed = true;
            }
        }
        let result = if allowed { Response::Allow } else { Response::Abstain };
        trace!(?result, children = self.filters.len(), "quantifier scanned");
        result
    }
}

impl fmt::Debug for One {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("One").field("len", &self.filters.len()).finish()
    }
}
