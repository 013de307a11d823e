#![cfg(feature = "math")]

//! The arithmetic half of the sample: [`factorial`] and its overflow-aware companion
//! [`checked_factorial`].
//!
//! Both functions are total - there is no input for which they panic or return an error. The
//! only design point worth the name is what "total" means for an operation that can overflow a
//! fixed-width integer; see the individual function docs.

mod factorial;
mod tests;

pub use factorial::*;
