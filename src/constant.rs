use crate::filter::Filter;
use crate::query::Query;
use crate::response::Response;

/// A filter that ignores its query and always gives the same response.
///
/// Constants carry no per-instance state beyond the response itself, so the
/// three possible values are available as the shared [`Constant::ALLOW`],
/// [`Constant::ABSTAIN`], and [`Constant::DENY`] instances; the type is
/// `Copy` and equality is by value.
///
/// # Example
///
/// ```
/// use sift::{Constant, FilterExt};
///
/// assert!(Constant::ALLOW.allows(&"anything"));
/// assert!(Constant::DENY.denies(&12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constant {
    response: Response,
}

impl Constant {
    /// The filter that allows every query.
    pub const ALLOW: Constant = Constant::new(Response::Allow);

    /// The filter that abstains from every query.
    pub const ABSTAIN: Constant = Constant::new(Response::Abstain);

    /// The filter that denies every query.
    pub const DENY: Constant = Constant::new(Response::Deny);

    /// Creates a filter that always responds with `response`.
    pub const fn new(response: Response) -> Self {
        Self { response }
    }

    /// Returns the response this filter always gives.
    pub fn response(&self) -> Response {
        self.response
    }
}

impl Filter for Constant {
    fn query(&self, _query: &dyn Query) -> Response {
        self.response
    }
}
