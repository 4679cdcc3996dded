use crate::filter::Filter;
use crate::query::Query;
use crate::response::Response;

/// A filter that inverts its child's response.
///
/// `Allow` becomes `Deny`, `Deny` becomes `Allow`, and `Abstain` stays
/// `Abstain`; a filter with no opinion still has no opinion when
/// negated. Wrapping twice gives back the original behavior.
///
/// # Example
///
/// ```
/// use sift::{Constant, FilterExt, Not};
///
/// let filter = Not::new(Constant::ALLOW);
/// assert!(filter.denies(&"q"));
/// assert!(Not::new(filter).allows(&"q"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Not<F> {
    filter: F,
}

impl<F> Not<F> {
    /// Creates a filter inverting `filter`'s responses.
    pub fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Returns the child filter.
    pub fn filter(&self) -> &F {
        &self.filter
    }
}

impl<F: Filter> Filter for Not<F> {
    fn query(&self, query: &dyn Query) -> Response {
        self.filter.query(query).inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterExt;
    use crate::constant::Constant;
    use crate::testing::Equals;

    #[test]
    fn test_inverts_leaf() {
        let filter = Not::new(Equals(20));
        assert!(filter.allows(&10));
        assert!(filter.allows(&15));
        assert!(filter.denies(&20));
    }

    #[test]
    fn test_abstain_passes_through() {
        let filter = Not::new(Constant::ABSTAIN);
        assert!(filter.abstains(&0));

        // Equals abstains from non-i32 queries, and negation keeps it so.
        let filter = Not::new(Equals(0));
        assert!(filter.abstains(&"not a number"));
    }

    #[test]
    fn test_double_negation_is_identity() {
        let queries = [9, 10, 11];
        for q in queries {
            assert_eq!(
                Not::new(Not::new(Equals(10))).query(&q),
                Equals(10).query(&q),
            );
        }
    }

    #[test]
    fn test_filter_accessor() {
        let filter = Not::new(Constant::DENY);
        assert_eq!(*filter.filter(), Constant::DENY);
    }
}
