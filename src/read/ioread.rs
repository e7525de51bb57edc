use std::io;

use crate::error::Error;

use super::{private, Read};

/// A reader for IO streams
#[derive(Debug)]
pub struct IoReader<R> {
    // an io reader
    reader: R,
    peeked: Option<u8>,
}

impl<R: io::Read> IoReader<R> {
    /// Creates a new reader over an IO stream
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            peeked: None,
        }
    }

    /// Consume the reader and obtain the wrapped stream
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_one(&mut self) -> Result<u8, Error> {
        let mut buf = [0u8; 1];
        self.reader.read_exact(&mut buf)?;
        Ok(buf[0])
    }
}

impl<R: io::Read> private::Sealed for IoReader<R> {}

impl<R: io::Read> Read for IoReader<R> {
    fn peek(&mut self) -> Result<u8, Error> {
        match self.peeked {
            Some(b) => Ok(b),
            None => {
                let b = self.read_one()?;
                self.peeked = Some(b);
                Ok(b)
            }
        }
    }

    fn next(&mut self) -> Result<u8, Error> {
        match self.peeked.take() {
            Some(b) => Ok(b),
            None => self.read_one(),
        }
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        if buf.is_empty() {
            return Ok(());
        }

        match self.peeked.take() {
            Some(b) => {
                buf[0] = b;
                self.reader.read_exact(&mut buf[1..])?;
            }
            None => self.reader.read_exact(buf)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{IoReader, Read};

    const SHORT_BUFFER: &[u8] = &[0, 1, 2];
    const LONG_BUFFER: &[u8] = &[
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    ];

    #[test]
    fn test_peek() {
        let reader = SHORT_BUFFER;
        let mut io_reader = IoReader::new(reader);

        let peek0 = io_reader.peek().expect("Should not return error");
        let peek1 = io_reader.peek().expect("Should not return error");
        let peek2 = io_reader.peek().expect("Should not return error");

        assert_eq!(peek0, reader[0]);
        assert_eq!(peek1, reader[0]);
        assert_eq!(peek2, reader[0]);
    }

    #[test]
    fn test_next() {
        let reader = SHORT_BUFFER;
        let mut io_reader = IoReader::new(reader);

        for i in 0..reader.len() {
            let peek = io_reader.peek().expect("Should not return error");
            let next = io_reader.next().expect("Should not return error");

            assert_eq!(peek, reader[i]);
            assert_eq!(next, reader[i]);
        }

        assert!(io_reader.peek().is_err());
        assert!(io_reader.next().is_err());
    }

    #[test]
    fn test_read_const_bytes_without_peek() {
        let reader = LONG_BUFFER;
        let mut io_reader = IoReader::new(reader);

        const N: usize = 10;
        let bytes = io_reader
            .read_const_bytes::<N>()
            .expect("Should not return error");
        assert_eq!(&bytes[..], &reader[..N]);

        let bytes = io_reader
            .read_const_bytes::<N>()
            .expect("Should not return error");
        assert_eq!(&bytes[..], &reader[N..2 * N]);

        assert!(io_reader.read_const_bytes::<N>().is_err());
    }

    #[test]
    fn test_read_const_bytes_after_peek() {
        let reader = LONG_BUFFER;
        let mut io_reader = IoReader::new(reader);

        let peek0 = io_reader.peek().expect("Should not return error");
        assert_eq!(peek0, reader[0]);

        const N: usize = 10;
        let bytes = io_reader
            .read_const_bytes::<N>()
            .expect("Should not return error");
        assert_eq!(&bytes[..], &reader[..N]);
    }

    #[test]
    fn test_incomplete_read_const_bytes() {
        let reader = SHORT_BUFFER;
        let mut io_reader = IoReader::new(std::io::Cursor::new(reader));

        const N: usize = 10;
        assert!(io_reader.read_const_bytes::<N>().is_err());
    }
}
