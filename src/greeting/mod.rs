#![cfg(feature = "greeting")]

//! The printing half of the sample: a fixed two-line greeting.
//!
//! [`greeting`] writes straight to standard output and discards write failures, which is all
//! the error handling a hello-world deserves. The variant that can actually report failure,
//! [`write_greeting`], takes any [`Write`](std::io::Write) sink - that seam is also what the
//! unit tests drive.

mod error;
mod greeting;

pub use error::*;
pub use greeting::*;
