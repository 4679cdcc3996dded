use std::sync::Arc;

use crate::not::Not;
use crate::query::Query;
use crate::response::Response;

/// A filter maps a query to a [`Response`].
///
/// This is the single capability everything in the crate is built on: leaf
/// filters inspect the query and take a position, and the combinators
/// ([`All`](crate::All), [`Any`](crate::Any), [`One`](crate::One),
/// [`Not`](crate::Not), [`Constant`](crate::Constant)) fold the responses
/// of their children into one.
///
/// Filters are immutable once constructed: `query` takes `&self`, and a
/// filter must not mutate its own decision logic between calls. Because of
/// that, a filter behind an [`Arc`] can be queried from any number of
/// threads without locking.
///
/// # Example
///
/// ```
/// use sift::{Filter, FilterExt, Query, Response};
///
/// /// Allows even numbers, denies odd ones, and has no opinion about
/// /// anything that is not an `i32`.
/// struct Even;
///
/// impl Filter for Even {
///     fn query(&self, query: &dyn Query) -> Response {
///         match query.downcast_ref::<i32>() {
///             Some(n) => Response::from(n % 2 == 0),
///             None => Response::Abstain,
///         }
///     }
/// }
///
/// assert!(Even.allows(&4));
/// assert!(Even.denies(&3));
/// assert!(Even.abstains(&"not a number"));
/// ```
pub trait Filter {
    /// Queries this filter for a response.
    fn query(&self, query: &dyn Query) -> Response;
}

/// A boxed filter, as held by the composite combinators.
///
/// The `Send + Sync` bounds are what make a finished filter tree safe to
/// share between threads; a leaf with interior mutability that is not
/// thread-safe can still be used directly, just not as a child of a
/// composite.
pub type BoxedFilter = Box<dyn Filter + Send + Sync>;

/// Derived conveniences available on every [`Filter`].
///
/// These are defined purely in terms of [`Filter::query`] and are
/// implemented once for all filters, so no filter can give them a meaning
/// that disagrees with its `query`.
pub trait FilterExt: Filter {
    /// Returns `true` if this filter responds [`Response::Allow`].
    fn allows(&self, query: &dyn Query) -> bool {
        self.query(query) == Response::Allow
    }

    /// Returns `true` if this filter responds [`Response::Abstain`].
    fn abstains(&self, query: &dyn Query) -> bool {
        self.query(query) == Response::Abstain
    }

    /// Returns `true` if this filter responds [`Response::Deny`].
    fn denies(&self, query: &dyn Query) -> bool {
        self.query(query) == Response::Deny
    }

    /// Boxes this filter for use as a child of a composite.
    fn boxed(self) -> BoxedFilter
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }

    /// Wraps this filter in [`Not`], inverting its responses.
    ///
    /// # Example
    ///
    /// ```
    /// use sift::{Constant, FilterExt};
    ///
    /// assert!(Constant::ALLOW.not().denies(&()));
    /// ```
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }
}

impl<F: Filter + ?Sized> FilterExt for F {}

impl<F: Filter + ?Sized> Filter for &F {
    fn query(&self, query: &dyn Query) -> Response {
        (**self).query(query)
    }
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    fn query(&self, query: &dyn Query) -> Response {
        (**self).query(query)
    }
}

impl<F: Filter + ?Sized> Filter for Arc<F> {
    fn query(&self, query: &dyn Query) -> Response {
        (**self).query(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Constant;

    #[test]
    fn test_derived_predicates_agree_with_query() {
        let query = "anything";
        for filter in [Constant::ALLOW, Constant::ABSTAIN, Constant::DENY] {
            assert_eq!(filter.allows(&query), filter.query(&query) == Response::Allow);
            assert_eq!(filter.abstains(&query), filter.query(&query) == Response::Abstain);
            assert_eq!(filter.denies(&query), filter.query(&query) == Response::Deny);
        }
    }

    #[test]
    fn test_query_through_box_and_arc() {
        let boxed: BoxedFilter = Constant::DENY.boxed();
        assert_eq!(boxed.query(&0), Response::Deny);

        let shared: Arc<dyn Filter> = Arc::new(Constant::ALLOW);
        assert_eq!(shared.query(&0), Response::Allow);
        assert_eq!(Arc::clone(&shared).query(&0), Response::Allow);
    }

    #[test]
    fn test_query_through_reference() {
        let filter = Constant::ABSTAIN;
        let by_ref: &dyn Filter = &filter;
        assert!(by_ref.abstains(&"q"));
    }
}
