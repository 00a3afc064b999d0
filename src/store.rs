//! Line store: reads the hosts file into lines and writes them back.
//!
//! Lines are kept as raw bytes so content we do not manage is written back
//! exactly as read, whatever its encoding.

use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::HostsError;

/// Read `path` into lines without terminators.
///
/// A line together with its `\n` or `\r\n` must fit in `buffer_size` bytes
/// (an unterminated last line must be shorter than `buffer_size`). Longer
/// lines fail with [`HostsError::LineTooLong`] instead of being split or
/// truncated.
pub fn read_lines(path: &Path, buffer_size: usize) -> Result<Vec<Vec<u8>>, HostsError> {
    let file = fs::File::open(path).map_err(|e| HostsError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();
    let limit = buffer_size.max(1);

    for line_no in 1usize.. {
        let mut buf = Vec::new();
        let n = (&mut reader)
            .take(limit as u64)
            .read_until(b'\n', &mut buf)
            .map_err(|e| HostsError::io(path, e))?;
        if n == 0 {
            break;
        }
        match buf.strip_suffix(b"\n") {
            Some(line) => {
                let line = line.strip_suffix(b"\r").unwrap_or(line);
                lines.push(line.to_vec());
            }
            None if buf.len() >= limit => {
                // a trailing '\r' may be the first half of "\r\n"
                let partial = buf.strip_suffix(b"\r").unwrap_or(&buf);
                return Err(HostsError::LineTooLong {
                    line: line_no,
                    content: String::from_utf8_lossy(partial).into_owned(),
                });
            }
            None => lines.push(buf),
        }
    }

    tracing::debug!(path = %path.display(), lines = lines.len(), "read hosts file");
    Ok(lines)
}

/// Overwrite `path` with `lines`, one per line.
///
/// The file must already exist; it is truncated in place rather than
/// recreated so ownership and permissions survive. A failed write leaves
/// whatever was written so far.
pub fn write_lines(path: &Path, lines: &[Vec<u8>]) -> Result<(), HostsError> {
    let file = fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| HostsError::io(path, e))?;
    let mut w = BufWriter::new(file);
    for line in lines {
        w.write_all(line)
            .and_then(|()| w.write_all(b"\n"))
            .map_err(|e| HostsError::io(path, e))?;
    }
    w.flush().map_err(|e| HostsError::io(path, e))?;

    tracing::debug!(path = %path.display(), lines = lines.len(), "wrote hosts file");
    Ok(())
}
