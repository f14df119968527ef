//! Output sinks for the serializer.
//!
//! The serializer only ever appends text, so a sink is anything with a
//! single `write_str` operation. `String` is the native-text sink;
//! [`IoWrite`] adapts any [`std::io::Write`] and transcodes into the
//! configured [`Encoding`] on the way out.

use crate::{Encoding, Result};
use std::io;

/// A destination for hstore text.
pub trait Write {
    /// Appends `s` to the sink.
    fn write_str(&mut self, s: &str) -> Result<()>;
}

impl Write for String {
    #[inline]
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.push_str(s);
        Ok(())
    }
}

impl<W: Write + ?Sized> Write for &mut W {
    #[inline]
    fn write_str(&mut self, s: &str) -> Result<()> {
        (**self).write_str(s)
    }
}

/// A byte-oriented sink writing encoded text to an [`io::Write`].
pub struct IoWrite<W> {
    writer: W,
    encoding: Encoding,
    scratch: Vec<u8>,
}

impl<W: io::Write> IoWrite<W> {
    pub fn new(writer: W, encoding: Encoding) -> Self {
        IoWrite {
            writer,
            encoding,
            scratch: Vec::new(),
        }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> Write for IoWrite<W> {
    fn write_str(&mut self, s: &str) -> Result<()> {
        if self.encoding == Encoding::Utf8 {
            self.writer.write_all(s.as_bytes())?;
        } else {
            self.scratch.clear();
            self.encoding.encode_into(s, &mut self.scratch);
            self.writer.write_all(&self.scratch)?;
        }
        Ok(())
    }
}
