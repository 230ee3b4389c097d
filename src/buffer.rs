//! Fixed-capacity output buffer.
//!
//! [`OutputWriter`] is the write cursor the encoders advance during rendering;
//! [`FormattedBuffer`] is the finished, immutable result.

use std::borrow::Cow;
use std::ffi::CStr;
use std::fmt;

/// Write cursor over a fixed-capacity byte slice.
///
/// Writes past the end panic: the capacity is computed from worst-case
/// lengths before rendering starts, so an overflow is a bug in an estimator.
pub struct OutputWriter<'b> {
    buf: &'b mut [u8],
    pos: usize,
}

impl<'b> OutputWriter<'b> {
    pub fn new(buf: &'b mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        self.buf[self.pos] = b;
        self.pos += 1;
    }

    /// Writes a byte slice.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    /// Writes `n` copies of `b`.
    pub fn write_repeated(&mut self, b: u8, n: usize) {
        let end = self.pos + n;
        self.buf[self.pos..end].fill(b);
        self.pos = end;
    }

    /// Number of bytes written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}

/// A rendered template: fixed-capacity storage plus the effective length.
///
/// Bytes past the effective length are zero. A terminator is guaranteed only
/// when [`is_terminated`](Self::is_terminated) is true.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FormattedBuffer {
    data: Box<[u8]>,
    len: usize,
    terminated: bool,
}

impl FormattedBuffer {
    pub(crate) fn new(data: Box<[u8]>, len: usize, terminated: bool) -> Self {
        debug_assert!(len <= data.len(), "effective length {len} > capacity {}", data.len());
        Self { data, len, terminated }
    }

    /// Total capacity in bytes, terminator slot included.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Effective length: bytes actually written.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether a zero byte was written at the effective length.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// The rendered bytes, bounded by the effective length.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// The rendered text, if it is valid UTF-8.
    ///
    /// Only `%c` and `%s` with non-UTF-8 input can make it invalid.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// Copies the rendered bytes into a `String`, replacing invalid UTF-8.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// The rendered text as a C string, if a terminator was written.
    ///
    /// Embedded zero bytes (from `%s` with [`StrPolicy::CopyAll`](crate::StrPolicy::CopyAll)
    /// or `%c`) end the C string early.
    pub fn as_c_str(&self) -> Option<&CStr> {
        if !self.terminated {
            return None;
        }
        CStr::from_bytes_until_nul(&self.data[..=self.len]).ok()
    }

    /// The rendered bytes, dropping the unused capacity.
    pub fn into_vec(self) -> Vec<u8> {
        let mut v = self.data.into_vec();
        v.truncate(self.len);
        v
    }
}

impl AsRef<[u8]> for FormattedBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for FormattedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormattedBuffer")
            .field("text", &self.to_string_lossy())
            .field("len", &self.len)
            .field("capacity", &self.data.len())
            .finish()
    }
}

impl fmt::Display for FormattedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl PartialEq<str> for FormattedBuffer {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for FormattedBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<[u8]> for FormattedBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for FormattedBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}
