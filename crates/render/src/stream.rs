//! Output sinks for rendered bodies.
//!
//! A response body is a [`Body`]: either an in-memory [`MemoryStream`] or any
//! boxed [`OutputStream`] supplied by the caller (a file, a socket adapter).
//! Renderers reset the body before writing so the output always starts at the
//! beginning of the sink. When a body refuses to be reset or written, the
//! renderer swaps in a fresh `MemoryStream`.

use std::fmt;
use std::fs::File;
use std::io::{self, Seek, SeekFrom, Write};

/// A writable sink for rendered output.
pub trait OutputStream: Write + Send {
    /// Returns false if the stream does not accept writes at all.
    fn is_writable(&self) -> bool {
        true
    }

    /// Moves to the start of the stream, discarding previous content.
    fn reset(&mut self) -> io::Result<()>;
}

/// A growable in-memory stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStream {
    buffer: Vec<u8>,
    read_only: bool,
}

impl MemoryStream {
    /// Creates an empty, writable stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stream holding `contents` that rejects every write.
    pub fn read_only(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            buffer: contents.into(),
            read_only: true,
        }
    }

    /// The bytes written so far.
    pub fn contents(&self) -> &[u8] {
        &self.buffer
    }

    /// The contents as text, if they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.buffer).ok()
    }

    /// Consumes the stream, returning its bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

impl Write for MemoryStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "stream is read-only",
            ));
        }
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl OutputStream for MemoryStream {
    fn is_writable(&self) -> bool {
        !self.read_only
    }

    fn reset(&mut self) -> io::Result<()> {
        if self.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "stream is read-only",
            ));
        }
        self.buffer.clear();
        Ok(())
    }
}

impl OutputStream for File {
    fn reset(&mut self) -> io::Result<()> {
        self.set_len(0)?;
        self.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}

/// The body of a rendered response.
pub enum Body {
    /// An in-memory body.
    Memory(MemoryStream),
    /// A caller-supplied sink.
    Stream(Box<dyn OutputStream>),
}

impl Body {
    /// An empty in-memory body.
    pub fn memory() -> Self {
        Body::Memory(MemoryStream::new())
    }

    /// Wraps a caller-supplied sink.
    pub fn from_stream(stream: impl OutputStream + 'static) -> Self {
        Body::Stream(Box::new(stream))
    }

    /// The body bytes, for in-memory bodies.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Body::Memory(stream) => Some(stream.contents()),
            Body::Stream(_) => None,
        }
    }

    /// The body text, for in-memory bodies holding UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Body::Memory(stream) => stream.as_str(),
            Body::Stream(_) => None,
        }
    }

    /// Returns true for in-memory bodies.
    pub fn is_memory(&self) -> bool {
        matches!(self, Body::Memory(_))
    }

    fn stream_mut(&mut self) -> &mut dyn OutputStream {
        match self {
            Body::Memory(stream) => stream,
            Body::Stream(stream) => stream.as_mut(),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Body::memory()
    }
}

impl From<MemoryStream> for Body {
    fn from(stream: MemoryStream) -> Self {
        Body::Memory(stream)
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Memory(stream) => f
                .debug_struct("Memory")
                .field("len", &stream.contents().len())
                .field("read_only", &stream.read_only)
                .finish(),
            Body::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

impl Write for Body {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream_mut().flush()
    }
}

impl OutputStream for Body {
    fn is_writable(&self) -> bool {
        match self {
            Body::Memory(stream) => stream.is_writable(),
            Body::Stream(stream) => stream.is_writable(),
        }
    }

    fn reset(&mut self) -> io::Result<()> {
        self.stream_mut().reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_stream_reset_discards() {
        let mut stream = MemoryStream::new();
        stream.write_all(b"old content").unwrap();
        stream.reset().unwrap();
        stream.write_all(b"new").unwrap();
        assert_eq!(stream.as_str(), Some("new"));
    }

    #[test]
    fn test_read_only_stream() {
        let mut stream = MemoryStream::read_only("fixed");
        assert!(!stream.is_writable());
        assert!(stream.write_all(b"x").is_err());
        assert!(stream.reset().is_err());
        assert_eq!(stream.as_str(), Some("fixed"));
    }

    #[test]
    fn test_body_delegates() {
        let mut body = Body::memory();
        assert!(body.is_memory());
        assert!(body.is_writable());
        body.write_all(b"hello").unwrap();
        assert_eq!(body.as_str(), Some("hello"));

        let body = Body::from(MemoryStream::read_only("x"));
        assert!(!body.is_writable());
        assert_eq!(body.as_bytes(), Some(&b"x"[..]));
    }

    #[test]
    fn test_body_debug() {
        let body = Body::memory();
        assert_eq!(format!("{:?}", body), "Memory { len: 0, read_only: false }");
    }
}
