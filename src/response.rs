/// The result of querying a filter.
///
/// A response is three-valued: a filter can endorse a query, object to it,
/// or decline to take a position at all. Combinators give `Deny` priority
/// over `Allow`, and `Abstain` propagates until some filter takes a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Response {
    /// The filter allows the query.
    Allow,
    /// The filter has no opinion about the query.
    Abstain,
    /// The filter denies the query.
    Deny,
}

impl Response {
    /// Returns the inverse response.
    ///
    /// `Allow` and `Deny` swap; `Abstain` has no inverse and maps to itself.
    ///
    /// # Example
    ///
    /// ```
    /// use sift::Response;
    ///
    /// assert_eq!(Response::Allow.inverse(), Response::Deny);
    /// assert_eq!(Response::Abstain.inverse(), Response::Abstain);
    /// assert_eq!(Response::Deny.inverse(), Response::Allow);
    /// ```
    pub fn inverse(self) -> Response {
        match self {
            Response::Allow => Response::Deny,
            Response::Abstain => Response::Abstain,
            Response::Deny => Response::Allow,
        }
    }

    /// Collapses this response to a `bool`.
    ///
    /// `Allow` is `true` and `Deny` is `false`. For `Abstain` the decision
    /// is deferred to `abstain`, which is only invoked in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use sift::Response;
    ///
    /// assert!(Response::Allow.to_bool(|| false));
    /// assert!(!Response::Deny.to_bool(|| true));
    /// assert!(Response::Abstain.to_bool(|| true));
    /// ```
    pub fn to_bool(self, abstain: impl FnOnce() -> bool) -> bool {
        match self {
            Response::Allow => true,
            Response::Abstain => abstain(),
            Response::Deny => false,
        }
    }
}

impl From<bool> for Response {
    /// Converts a `bool` into a response: `true` is `Allow`, `false` is
    /// `Deny`. Booleans have no way to express `Abstain`.
    fn from(value: bool) -> Self {
        if value { Response::Allow } else { Response::Deny }
    }
}
