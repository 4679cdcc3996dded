use std::any::Any;

/// An opaque query payload handed to [`Filter::query`](crate::Filter::query).
///
/// The library never looks inside a query; the only capability it needs is
/// type inspection, so that a [`Typed`](crate::Typed) filter can decide
/// whether a payload is one it understands and narrow it when it is.
///
/// `Query` is implemented for every `'static` type, so callers pass their
/// own context structs (or even plain values like `i32`) without any
/// ceremony:
///
/// ```
/// use sift::{Constant, FilterExt};
///
/// struct Request {
///     user: String,
/// }
///
/// let q = Request { user: "alice".to_string() };
/// assert!(Constant::ALLOW.allows(&q));
/// assert!(Constant::ALLOW.allows(&7));
/// ```
pub trait Query: Any {
    /// Returns the payload as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> Query for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn Query {
    /// Returns `true` if the payload is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Narrows the payload to type `T`, or `None` if it is something else.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downcast_to_own_type() {
        let query: &dyn Query = &42_i32;
        assert!(query.is::<i32>());
        assert_eq!(query.downcast_ref::<i32>(), Some(&42));
    }

    #[test]
    fn test_downcast_to_foreign_type() {
        let query: &dyn Query = &42_i32;
        assert!(!query.is::<String>());
        assert_eq!(query.downcast_ref::<String>(), None);
    }
}
