use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};

/// Writes `lines` to stdout when `file_name` is empty, otherwise creates (or
/// truncates) the named file and writes them there.
pub fn write_output(file_name: &str, lines: &[String]) -> io::Result<()> {
    if file_name.is_empty() {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_lines(&mut handle, lines)?;
        handle.flush()
    } else {
        let mut handle = BufWriter::new(File::create(file_name)?);
        write_lines(&mut handle, lines)?;
        handle.flush()
    }
}

/// One newline-terminated write per line, nothing else.
pub fn write_lines(handle: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(handle, "{}", line)?;
    }
    tracing::trace!(lines = lines.len(), "wrote formatted lines");
    Ok(())
}
