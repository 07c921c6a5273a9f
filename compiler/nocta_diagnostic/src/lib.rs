//! Diagnostics for the Nocta toolchain.
//!
//! Lexical problems are plain values: a scan returns the diagnostics it
//! produced alongside its tokens, and the caller decides what to do with
//! them. Nothing in this crate touches process state or performs I/O, so
//! independent source units can be scanned without cross-talk.

mod diagnostic;

pub use diagnostic::{has_errors, Diagnostic, Severity};
