use std::io::{self, Write};

use super::GreetError;

/// The version number embedded in the second line of the greeting.
const VERSION: i32 = 23;

/// Returns the formatted second line of the greeting: `Hello, C++23`.
///
/// The line is built from a private constant rather than written out literally, so the
/// formatting itself has something to test.
///
/// # Examples
/// ```
/// # use sample_library::greeting::greeting_line;
/// assert_eq!(greeting_line(), "Hello, C++23");
/// ```
pub fn greeting_line() -> String {
    format!("Hello, C++{VERSION}")
}

/// Writes the two greeting lines to `out`, propagating the first write failure.
///
/// This is the fallible core that [`greeting`] wraps. Pointing it at a [`Vec<u8>`](Vec) is the
/// easiest way to assert on the exact output.
///
/// # Examples
/// ```
/// # use sample_library::greeting::write_greeting;
/// let mut out = Vec::new();
/// write_greeting(&mut out)?;
/// assert_eq!(out, b"Hello, World!\nHello, C++23\n");
/// # Ok::<(), sample_library::greeting::GreetError>(())
/// ```
pub fn write_greeting<W: Write>(out: &mut W) -> Result<(), GreetError> {
    writeln!(out, "Hello, World!")?;
    writeln!(out, "{}", greeting_line())?;

    Ok(())
}

/// Writes the greeting to standard output: exactly two lines, `Hello, World!` then
/// `Hello, C++23`.
///
/// Failure to write to standard output is not reported; the result is discarded in the manner
/// of an unchecked stream write.
///
/// # Examples
/// ```
/// # use sample_library::greeting::greeting;
/// greeting();
/// ```
pub fn greeting() {
    let _ = write_greeting(&mut io::stdout().lock());
}
