//! Parsing for compact database connection strings ("DSNs").
//!
//! A DSN bundles the parameters needed to reach a data store into a single
//! delimiter-encoded string:
//!
//! ```text
//! dsn         := [ credentials "@" ] hostport [ "/" database ]
//! credentials := [ user ] [ ":" password ]
//! hostport    := [ host ] [ ":" port ]
//! ```
//!
//! [`Dsn::parse`] never fails: every field is optional, and a string with no
//! delimiters simply leaves most of the descriptor unpopulated. Delimiters
//! are matched by their *rightmost* occurrence, so credentials containing
//! `@` or `/` survive parsing. There is deliberately no scheme, query
//! string, percent-decoding, or IPv6 bracket syntax; this is not a URI
//! parser.
//!
//! ```rust
//! use tasty_dsn::{Dsn, Port};
//!
//! let dsn = Dsn::parse("user:pass@localhost:5432/warehouse");
//!
//! assert_eq!(dsn.get_user(), Some("user"));
//! assert_eq!(dsn.get_password(), Some("pass"));
//! assert_eq!(dsn.get_host(), Some("localhost"));
//! assert_eq!(dsn.get_port(), Some(&Port::Number(5432)));
//! assert_eq!(dsn.get_database(), Some("warehouse"));
//! ```
//!
//! Validation belongs to the caller: a descriptor may come back with no
//! host, or with a port segment that was present but not numeric (kept as
//! [`Port::Invalid`] rather than silently dropped). See
//! [`Dsn::port_number`].

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(future_incompatible)]

mod dsn;
pub mod error;

pub use dsn::{Dsn, Port};
pub use error::{Error, Result};
