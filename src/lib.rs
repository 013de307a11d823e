//! A deliberately tiny sample library: one arithmetic function and one function that prints a
//! greeting.
//!
//! # Purpose
//! This crate exists to be small. It's the project I reach for when I want to try out tooling -
//! lint configurations, doc generation, CI wiring - somewhere a real codebase would just get in
//! the way. The two modules are independent leaf functions with no shared state, so there's
//! nothing to configure and very little to break.
//!
//! That also makes it a decent first crate to read: every idiom used here ([`Result`]s with
//! typed errors, feature-gated modules, doctests) shows up once, in miniature.
//!
//! # Behavior
//! [`math::factorial`] treats `n <= 0` as an empty product and returns 1 rather than failing,
//! which surprises people exactly once. [`greeting::greeting`] writes two fixed lines to
//! standard output; the second embeds a version number which is fixed at 23.
//!
//! # Error Handling
//! Where an operation can actually fail (only writing the greeting, as it turns out), the error
//! is a strongly typed struct implementing [`Error`](std::error::Error) rather than a boxed
//! trait object. The arithmetic side never fails: overflow is reported through [`Option`] the
//! same way the standard library's `checked_*` operations report it.
//!
//! # Dependencies
//! Only derive macros (`derive_more`), because hand-writing [`Display`](std::fmt::Display) and
//! [`Error`](std::error::Error) impls for single-message error types is very repetitive
//! programming.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod greeting;
pub mod math;
