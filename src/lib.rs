//! Extracts XML documentation from policy module sources.
//!
//! Policy modules document themselves with `##` annotation comments placed
//! directly above `interface()`/`template()` declarations and above
//! `gen_tunable()`/`gen_bool()` statements. This crate scans those files
//! line by line, attaches each comment block to the declaration that
//! follows it, and re-emits everything as a well-formed XML tree. It never
//! evaluates the policy itself; it only recognizes declaration headers and
//! the comments in front of them.

pub mod builders;
pub mod core;
