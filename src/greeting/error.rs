use std::io;

use derive_more::{Display, Error, From};

/// Returned by [`write_greeting`](super::write_greeting) when the sink refuses the bytes.
#[derive(Debug, Display, Error, From)]
#[display("failed to write greeting to output")]
pub struct GreetError {
    source: io::Error,
}
