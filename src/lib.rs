//! Sift: a library for composing independent allow/deny/abstain rules into
//! a single decision.
//!
//! Sift evaluates **filters** against **queries** to produce a three-valued
//! [`Response`]: `Allow`, `Deny`, or `Abstain`. Narrowly-scoped rules are
//! written as leaf filters and combined with the structural combinators
//! ([`All`], [`Any`], [`One`], [`Not`], and [`Constant`]) without any rule
//! needing to know about its siblings. The precedence is the one you want
//! for access control: an explicit denial always wins, an explicit allow
//! wins only if nothing vetoes it, and silence propagates.
//!
//! # Example
//!
//! ```
//! use sift::{All, FilterExt, Not, Response, Typed, TypedFilter};
//!
//! struct Request {
//!     user: String,
//!     path: String,
//! }
//!
//! struct KnownUser;
//!
//! impl TypedFilter for KnownUser {
//!     type Query = Request;
//!
//!     fn typed_query(&self, request: &Request) -> Response {
//!         Response::from(request.user == "alice" || request.user == "bob")
//!     }
//! }
//!
//! struct SecretPath;
//!
//! impl TypedFilter for SecretPath {
//!     type Query = Request;
//!
//!     fn typed_query(&self, request: &Request) -> Response {
//!         if request.path.starts_with("/secret") {
//!             Response::Allow
//!         } else {
//!             Response::Abstain
//!         }
//!     }
//! }
//!
//! // Known users may access anything outside /secret.
//! let policy = All::new(vec![
//!     Typed::new(KnownUser).boxed(),
//!     Not::new(Typed::new(SecretPath)).boxed(),
//! ]);
//!
//! let ok = Request { user: "alice".to_string(), path: "/home/alice".to_string() };
//! assert!(policy.allows(&ok));
//!
//! let secret = Request { user: "alice".to_string(), path: "/secret/keys".to_string() };
//! assert!(policy.denies(&secret));
//!
//! let stranger = Request { user: "mallory".to_string(), path: "/home/alice".to_string() };
//! assert!(policy.denies(&stranger));
//! ```
//!
//! Filters are immutable once built, so a filter tree is typically
//! constructed at configuration time and then queried arbitrarily often,
//! from as many threads as needed.

mod all;
mod any;
mod constant;
mod filter;
pub mod filters;
mod not;
mod one;
mod query;
mod response;
mod typed;

#[cfg(test)]
mod testing;

pub use all::All;
pub use any::Any;
pub use constant::Constant;
pub use filter::{BoxedFilter, Filter, FilterExt};
pub use not::Not;
pub use one::One;
pub use query::Query;
pub use response::Response;
pub use typed::{Typed, TypedFilter};
