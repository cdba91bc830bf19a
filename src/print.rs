use std::io;
use std::io::Write;

/// Writes `value` in decimal followed by a line terminator.
pub fn write_i64<W: Write>(w: &mut W, value: i64) -> io::Result<()> {
    writeln!(w, "{value}")
}

/// Prints `value` and a line terminator to standard output.
///
/// This is the form generated code calls: no failure contract is exposed,
/// so a write error is discarded, as the original runtime's `printf` shim
/// discarded it. Callers that care about write failures use [`write_i64`]
/// with a writer of their own.
pub fn print_i64(value: i64) {
    let mut stdout = io::stdout().lock();
    let _ = write_i64(&mut stdout, value);
}
