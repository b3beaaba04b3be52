//! Line framing: turning raw TCP read chunks into discrete payloads.
//!
//! TCP delivers a byte stream with no message boundaries — one logical
//! message may arrive split across several reads, and one read may carry
//! several messages. [`LineFramer`] owns the accumulation buffer for a
//! single connection and cuts the stream at `\n` delimiters.

/// Accumulates raw read chunks and yields complete newline-delimited
/// payloads in arrival order.
///
/// One framer per connection; the buffer is connection-scoped and never
/// shared. Bytes after the last delimiter stay buffered until a later
/// chunk completes them.
///
/// # Example
///
/// ```rust
/// use skirmish_protocol::LineFramer;
///
/// let mut framer = LineFramer::new();
/// framer.extend(b"{\"a");
/// assert_eq!(framer.next_payload(), None); // incomplete
/// framer.extend(b"\":1}\nrest");
/// assert_eq!(framer.next_payload(), Some(b"{\"a\":1}".to_vec()));
/// assert_eq!(framer.next_payload(), None); // "rest" still buffered
/// ```
#[derive(Debug, Default)]
pub struct LineFramer {
    buf: Vec<u8>,
}

impl LineFramer {
    /// Creates an empty framer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one raw read chunk to the buffer.
    pub fn extend(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Extracts the next complete payload, if one is buffered.
    ///
    /// Scans for the first `\n`, removes the line plus delimiter from the
    /// buffer, and returns the line with leading/trailing ASCII whitespace
    /// trimmed. Blank lines are consumed silently, never surfaced. Returns
    /// `None` once no complete line remains; call again after the next
    /// [`extend`](Self::extend).
    pub fn next_payload(&mut self) -> Option<Vec<u8>> {
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            // Drop the delimiter, then trim the payload.
            let payload = line[..line.len() - 1].trim_ascii();
            if !payload.is_empty() {
                return Some(payload.to_vec());
            }
        }
        None
    }

    /// Number of buffered bytes not yet part of a complete payload.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }
}
