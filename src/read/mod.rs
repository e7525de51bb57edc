//! Custom `Read` trait over byte sources

use crate::error::Error;

mod ioread;
pub use ioread::*;

mod sliceread;
pub use sliceread::*;

mod private {
    pub trait Sealed {}
}

/// A custom Read trait for internal use.
///
/// At most one byte is ever buffered for `peek`; the buffered byte is
/// handed out by the next consuming read. Running out of input surfaces as
/// an [`Error::Io`] with `UnexpectedEof`.
pub trait Read: private::Sealed {
    /// Peek the next byte without consuming it
    fn peek(&mut self) -> Result<u8, Error>;

    /// Read the next byte
    fn next(&mut self) -> Result<u8, Error>;

    /// Read n bytes
    ///
    /// Prefered when the size is small and can be stack allocated
    fn read_const_bytes<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut buf = [0u8; N];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Consume `n` bytes into a freshly allocated buffer
    fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0u8; n];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Read exactly `buf.len()` bytes into the buffer
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error>;
}

pub(crate) fn eof() -> Error {
    Error::Io(std::io::Error::new(
        std::io::ErrorKind::UnexpectedEof,
        "unexpected end of stream",
    ))
}
