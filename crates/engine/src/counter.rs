use crate::error::{EngineError, Result};
use crate::options::TerminatorMode;
use linecheck_shared_kernel::LineCount;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open `path`, count its lines and close it again before returning.
///
/// # Errors
/// Returns [`EngineError::FileRead`] when the file cannot be opened or read.
pub fn count_file(path: &Path, mode: TerminatorMode) -> Result<LineCount> {
    let file = File::open(path).map_err(|e| EngineError::file_read(path, e))?;
    let mut reader = BufReader::new(file);
    count_lines(&mut reader, mode).map_err(|e| EngineError::file_read(path, e))
}

/// Count line-terminated records in a byte stream.
///
/// A trailing segment without terminator counts as one more line, an empty
/// stream counts zero. Content is never decoded.
///
/// # Errors
/// Propagates read errors from `reader` other than `Interrupted`.
pub fn count_lines<R: BufRead>(reader: &mut R, mode: TerminatorMode) -> io::Result<LineCount> {
    let mut lines = LineCount::zero();
    let mut last_byte: Option<u8> = None;
    let mut pending_cr = false;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        last_byte = buf.last().copied();
        lines += bytecount::count(buf, b'\n');
        if mode == TerminatorMode::Universal {
            lines += lone_carriage_returns(buf, &mut pending_cr);
        }

        let len = buf.len();
        reader.consume(len);
    }

    // A `\r` ending the stream was already counted as a terminator.
    if pending_cr {
        lines += 1;
    } else if let Some(b) = last_byte
        && b != b'\n'
    {
        lines += 1;
    }

    Ok(lines)
}

/// `\r` bytes not followed by `\n`. A `\r` at the end of `buf` is decided by
/// the first byte of the next chunk, carried in `pending_cr`.
fn lone_carriage_returns(buf: &[u8], pending_cr: &mut bool) -> usize {
    let mut count = 0;
    if std::mem::take(pending_cr) && buf.first() != Some(&b'\n') {
        count += 1;
    }
    for pos in memchr::memchr_iter(b'\r', buf) {
        match buf.get(pos + 1) {
            Some(b'\n') => {}
            Some(_) => count += 1,
            None => *pending_cr = true,
        }
    }
    count
}
