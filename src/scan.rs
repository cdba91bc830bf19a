use std::io;
use std::io::BufRead;

/// Reads signed 64-bit integers, one token at a time, from a buffered
/// source.
///
/// Token syntax matches C's `scanf("%" SCNd64)`: any run of ASCII
/// whitespace is skipped, then an optional `+` or `-` sign, then decimal
/// digits. A scan consumes only the whitespace it skipped and the token it
/// read, so the scanner can be interleaved with other reads on the same
/// source.
///
/// `next_i64()` distinguishes the three ways a read can end:
///
///   * `Ok(Some(v))`: a token was read.
///   * `Ok(None)`: the source is exhausted (only whitespace remained).
///   * `Err(e)`: the source failed, or the token was not an integer
///     (`ErrorKind::InvalidData`), including literals outside the `i64`
///     range.
///
/// End of source is deliberately not an error: the input generator kind
/// turns it into ordinary termination, and direct callers get an `Option`
/// to match on.
#[derive(Debug)]
pub struct IntScanner<R> {
    src: R,
}

impl<R: BufRead> IntScanner<R> {
    pub fn new(src: R) -> Self {
        Self { src }
    }

    /// Returns the source, positioned after the last token read.
    pub fn into_inner(self) -> R {
        self.src
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        // An empty fill_buf() means end of source.
        Ok(self.src.fill_buf()?.first().copied())
    }

    /// Reads the next integer token, or reports end of source.
    pub fn next_i64(&mut self) -> io::Result<Option<i64>> {
        while let Some(b) = self.peek()? {
            if !b.is_ascii_whitespace() {
                break;
            }
            self.src.consume(1);
        }

        let mut negative = false;
        match self.peek()? {
            None => return Ok(None),
            Some(b'+') => self.src.consume(1),
            Some(b'-') => {
                negative = true;
                self.src.consume(1);
            }
            Some(_) => {}
        }

        // Accumulate toward negative infinity when the sign is negative so
        // that i64::MIN, whose magnitude is not representable positively,
        // parses without overflow.
        let mut value: i64 = 0;
        let mut saw_digit = false;
        while let Some(b) = self.peek()? {
            if !b.is_ascii_digit() {
                break;
            }
            self.src.consume(1);
            saw_digit = true;
            let digit = (b - b'0') as i64;
            value = value
                .checked_mul(10)
                .and_then(|v| {
                    if negative {
                        v.checked_sub(digit)
                    } else {
                        v.checked_add(digit)
                    }
                })
                .ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        "integer out of range for i64",
                    )
                })?;
        }

        if !saw_digit {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "expected an integer",
            ));
        }
        Ok(Some(value))
    }
}
