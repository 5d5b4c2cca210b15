//! A tiny wildcard matching library.
//!
//! A pattern is an ordinary string in which the [`WILDCARD`] character `*` matches
//! zero or more characters of the haystack. Every other character matches itself.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters
//! - Any other character matches itself
//! - There is no escaping, so `*` can never be matched literally
//! - Any string is a valid pattern, matching never fails
//!
//! # Examples
//!
//! ```
//! use wildcard::{matches, matches_any, matches_ci};
//!
//! assert!(matches("alpha*", "alphabeta"));
//! assert!(matches("*beta", "alphabeta"));
//! assert!(!matches("*alpha", "alphabeta"));
//!
//! assert!(!matches("ALPHA*", "alphabeta"));
//! assert!(matches_ci("ALPHA*", "alphabeta"));
//!
//! assert!(matches_any("*mm*", ["alpha", "beta", "gamma"]));
//! ```
//!
//! # UTF-8 Handling
//!
//! Characters are compared as whole Unicode scalar values, not bytes:
//!
//! ```
//! use wildcard::matches;
//!
//! assert!(matches("🦀*🌟", "🦀🎉🌟"));
//! assert!(matches("*ä", "bär ä"));
//! ```

mod matching;

pub use matching::*;
