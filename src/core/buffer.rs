//! Bounded write buffers
//!
//! [`SliceWriter`] appends into a borrowed slice and silently truncates.
//! [`MessageBuffer`] is the fixed-capacity, stack-allocated buffer that holds
//! one message for the duration of a single logging call.

/// Append-only cursor over a borrowed byte slice. Never writes past the end.
pub struct SliceWriter<'b> {
    buf: &'b mut [u8],
    len: usize,
}

impl<'b> SliceWriter<'b> {
    #[inline]
    pub fn new(buf: &'b mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.len
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    /// Append as much of `bytes` as fits; returns the count appended.
    pub fn push(&mut self, bytes: &[u8]) -> usize {
        let n = bytes.len().min(self.remaining());
        self.buf[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
        n
    }

    #[inline]
    pub fn push_byte(&mut self, byte: u8) -> usize {
        self.push(core::slice::from_ref(&byte))
    }

    /// Let `f` write directly into the unused tail; `f` returns how many
    /// bytes it wrote, which is clamped to the tail length.
    pub fn push_with(&mut self, f: impl FnOnce(&mut [u8]) -> usize) -> usize {
        let tail = &mut self.buf[self.len..];
        let n = f(tail).min(tail.len());
        self.len += n;
        n
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

/// Per-call message buffer of capacity `N`.
///
/// The cursor never passes `N - 1`: content is limited to `N - 2` bytes so the
/// trailing newline appended by [`MessageBuffer::terminate`] always fits.
pub struct MessageBuffer<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> MessageBuffer<N> {
    const LIMIT: usize = N.saturating_sub(2);

    #[inline]
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; N],
            len: 0,
        }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append content, truncating at the reserved byte.
    pub fn push(&mut self, bytes: &[u8]) -> usize {
        self.write_with(|w| w.push(bytes))
    }

    /// Run `f` against a writer over the unused content region.
    pub fn write_with<R>(&mut self, f: impl FnOnce(&mut SliceWriter<'_>) -> R) -> usize {
        if self.len >= Self::LIMIT {
            return 0;
        }
        let mut writer = SliceWriter::new(&mut self.bytes[self.len..Self::LIMIT]);
        f(&mut writer);
        let n = writer.len();
        self.len += n;
        n
    }

    /// Append the trailing newline if the cursor stays below `N`.
    pub fn terminate(&mut self) {
        if self.len + 1 < N {
            self.bytes[self.len] = b'\n';
            self.len += 1;
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl<const N: usize> Default for MessageBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_writer_truncates() {
        let mut buf = [0u8; 5];
        let mut w = SliceWriter::new(&mut buf);
        assert_eq!(w.push(b"abc"), 3);
        assert_eq!(w.push(b"defg"), 2);
        assert!(w.is_full());
        assert_eq!(w.push_byte(b'x'), 0);
        assert_eq!(w.as_bytes(), b"abcde");
    }

    #[test]
    fn test_push_with_clamps() {
        let mut buf = [0u8; 4];
        let mut w = SliceWriter::new(&mut buf);
        w.push(b"ab");
        assert_eq!(w.push_with(|tail| tail.len() + 10), 2);
        assert_eq!(w.len(), 4);
    }

    #[test]
    fn test_message_buffer_reserves_newline() {
        let mut buf = MessageBuffer::<8>::new();
        assert_eq!(buf.push(b"0123456789"), 6);
        buf.terminate();
        assert_eq!(buf.as_bytes(), b"012345\n");
        assert_eq!(buf.len(), buf.capacity() - 1);
    }

    #[test]
    fn test_message_buffer_exactly_full() {
        let mut buf = MessageBuffer::<8>::new();
        assert_eq!(buf.push(b"012345"), 6);
        assert_eq!(buf.push(b"6"), 0);
        buf.terminate();
        assert_eq!(buf.as_bytes(), b"012345\n");
    }

    #[test]
    fn test_tiny_capacities() {
        let mut one = MessageBuffer::<1>::new();
        one.push(b"a");
        one.terminate();
        assert!(one.is_empty());

        let mut two = MessageBuffer::<2>::new();
        assert_eq!(two.push(b"a"), 0);
        two.terminate();
        assert_eq!(two.as_bytes(), b"\n");
    }

    #[test]
    fn test_zero_capacity_is_inert() {
        let mut buf = MessageBuffer::<0>::new();
        assert_eq!(buf.push(b"abc"), 0);
        buf.terminate();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_push_after_terminate_keeps_newline() {
        let mut buf = MessageBuffer::<4>::new();
        buf.push(b"abc");
        buf.terminate();
        assert_eq!(buf.push(b"d"), 0);
        assert_eq!(buf.as_bytes(), b"ab\n");
    }
}
