//! Module `file_ops`
//!
//! Local file handling and the chunked copy loop shared by uploads and
//! downloads. Files are opened in binary mode; bytes are copied verbatim.

use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;

use crate::error::{FtpError, Result};

/// Create (or truncate) the destination of a download
pub fn create_local_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| FtpError::LocalIo {
        path: path.to_path_buf(),
        source,
    })
}

/// Open the source of an upload
pub fn open_local_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| FtpError::LocalIo {
        path: path.to_path_buf(),
        source,
    })
}

/// Copy `reader` into `writer` in chunks of `buffer_size` until end of
/// stream, returning the number of bytes copied.
pub fn copy_chunks<R, W>(reader: &mut R, writer: &mut W, buffer_size: usize) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buffer = vec![0u8; buffer_size.max(1)];
    let mut total = 0u64;

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buffer[..n])?;
        total += n as u64;
    }

    writer.flush()?;
    Ok(total)
}
