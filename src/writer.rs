//! Streaming writer that emits a [`Value`] using the smallest legal
//! markers

use std::io::Write;

use crate::{error::Error, marker::Marker, value::Value};

/// Serialize a value into a byte vector
pub fn to_vec(value: &Value) -> Result<Vec<u8>, Error> {
    let mut writer = Writer::new(Vec::new());
    writer.write(value)?;
    Ok(writer.into_inner())
}

/// An encoder emitting values to a byte sink in wire order.
///
/// Integers travel with the narrowest of the `i`, `I`, `l`, `L` markers
/// whose range contains them (`U` for unsigned values up to 255); floats
/// take `d` only when the binary32 projection is lossless.
///
/// ```rust
/// use ubjson::{to_vec, Value};
///
/// assert_eq!(to_vec(&Value::from(42)).unwrap(), [0x69, 0x2a]);
/// assert_eq!(to_vec(&Value::from(-700)).unwrap(), [0x49, 0xfd, 0x44]);
/// ```
#[derive(Debug)]
pub struct Writer<W> {
    writer: W,
}

impl<W: Write> Writer<W> {
    /// Creates a writer over the given sink
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Shared access to the wrapped sink
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the writer and obtain the wrapped sink
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Emit one value, returning the number of bytes written.
    ///
    /// On failure bytes already emitted remain in the sink; the wire
    /// format has no transaction.
    pub fn write(&mut self, value: &Value) -> Result<usize, Error> {
        self.write_value(value)
    }

    fn write_value(&mut self, value: &Value) -> Result<usize, Error> {
        match value {
            Value::Null => self.write_marker(Marker::Null),
            Value::Bool(true) => self.write_marker(Marker::True),
            Value::Bool(false) => self.write_marker(Marker::False),
            Value::Char(c) => self.write_char(*c),
            Value::SignedInt(v) => self.write_i64(*v),
            Value::UnsignedInt(v) => self.write_u64(*v),
            Value::Float(v) => self.write_f64(*v),
            Value::String(s) => self.write_string(s),
            Value::Binary(bytes) => self.write_binary(bytes.as_slice()),
            Value::Array(items) => self.write_array(items),
            Value::Object(_) => self.write_object(value),
        }
    }

    #[inline]
    fn write_marker(&mut self, marker: Marker) -> Result<usize, Error> {
        self.writer.write_all(&[marker as u8])?;
        Ok(1)
    }

    fn write_char(&mut self, c: char) -> Result<usize, Error> {
        // `C` carries a single byte; wider code points travel as a
        // one-character string
        if (c as u32) <= 0x7f {
            self.writer.write_all(&[Marker::Char as u8, c as u8])?;
            Ok(2)
        } else {
            self.write_string(&c.to_string())
        }
    }

    #[inline]
    fn write_i64(&mut self, val: i64) -> Result<usize, Error> {
        if (i64::from(i8::MIN)..=i64::from(i8::MAX)).contains(&val) {
            self.writer.write_all(&[Marker::Int8 as u8, val as u8])?;
            Ok(2)
        } else if (i64::from(i16::MIN)..=i64::from(i16::MAX)).contains(&val) {
            self.writer.write_all(&[Marker::Int16 as u8])?;
            self.writer.write_all(&(val as i16).to_be_bytes())?;
            Ok(3)
        } else if (i64::from(i32::MIN)..=i64::from(i32::MAX)).contains(&val) {
            self.writer.write_all(&[Marker::Int32 as u8])?;
            self.writer.write_all(&(val as i32).to_be_bytes())?;
            Ok(5)
        } else {
            self.writer.write_all(&[Marker::Int64 as u8])?;
            self.writer.write_all(&val.to_be_bytes())?;
            Ok(9)
        }
    }

    #[inline]
    fn write_u64(&mut self, val: u64) -> Result<usize, Error> {
        if val <= u64::from(u8::MAX) {
            self.writer.write_all(&[Marker::Uint8 as u8, val as u8])?;
            Ok(2)
        } else if val <= i64::MAX as u64 {
            self.write_i64(val as i64)
        } else {
            // Draft-10 has no wide unsigned marker; the bit pattern goes
            // out as `L` and round-trips as a signed integer
            self.writer.write_all(&[Marker::Int64 as u8])?;
            self.writer.write_all(&val.to_be_bytes())?;
            Ok(9)
        }
    }

    #[inline]
    fn write_f64(&mut self, val: f64) -> Result<usize, Error> {
        let narrowed = val as f32;
        if f64::from(narrowed) == val {
            self.writer.write_all(&[Marker::Float32 as u8])?;
            self.writer.write_all(&narrowed.to_be_bytes())?;
            Ok(5)
        } else {
            self.writer.write_all(&[Marker::Float64 as u8])?;
            self.writer.write_all(&val.to_be_bytes())?;
            Ok(9)
        }
    }

    /// Lengths and item counts reuse the signed integer narrowing
    fn write_count(&mut self, len: usize) -> Result<usize, Error> {
        let len =
            i64::try_from(len).map_err(|_| Error::Value("length exceeds i64 range".into()))?;
        self.write_i64(len)
    }

    fn write_string(&mut self, s: &str) -> Result<usize, Error> {
        let mut written = self.write_marker(Marker::String)?;
        written += self.write_key(s)?;
        Ok(written)
    }

    /// Keys are count-prefixed bytes with no leading `S`
    fn write_key(&mut self, key: &str) -> Result<usize, Error> {
        let written = self.write_count(key.len())?;
        self.writer.write_all(key.as_bytes())?;
        Ok(written + key.len())
    }

    fn write_binary(&mut self, bytes: &[u8]) -> Result<usize, Error> {
        let mut written = self.write_marker(Marker::Binary)?;
        written += self.write_count(bytes.len())?;
        self.writer.write_all(bytes)?;
        Ok(written + bytes.len())
    }

    fn write_array(&mut self, items: &[Value]) -> Result<usize, Error> {
        let mut written = self.write_marker(Marker::ArrayStart)?;
        for item in items {
            written += self.write_value(item)?;
        }
        written += self.write_marker(Marker::ArrayEnd)?;
        Ok(written)
    }

    fn write_object(&mut self, value: &Value) -> Result<usize, Error> {
        let mut written = self.write_marker(Marker::ObjectStart)?;
        for key in value.keys() {
            written += self.write_key(key)?;
            written += self.write_value(&value[key])?;
        }
        written += self.write_marker(Marker::ObjectEnd)?;
        Ok(written)
    }
}
