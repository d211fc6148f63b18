//! Scanlines

/// Run of covered pixels `x .. x + len` on one scanline
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub x: i64,
    pub len: i64,
}

impl Span {
    /// One past the last pixel
    pub fn end(&self) -> i64 {
        self.x + self.len
    }
}

/// Covered spans of a single row
#[derive(Debug,Default,Clone)]
pub struct Scanline {
    pub spans: Vec<Span>,
    pub y: i64,
}

impl Scanline {
    pub fn new() -> Self {
        Self { spans: vec![], y: 0 }
    }
    pub fn reset_spans(&mut self) {
        self.spans.clear();
    }
    pub fn finalize(&mut self, y: i64) {
        self.y = y;
    }
    pub fn num_spans(&self) -> usize {
        self.spans.len()
    }
    /// Add the span `x .. x + len`
    ///
    /// Spans are expected in increasing x; a span starting where the
    /// previous one ends extends it.
    pub fn add_span(&mut self, x: i64, len: i64) {
        if len <= 0 {
            return;
        }
        if let Some(cur) = self.spans.last_mut() {
            if cur.end() == x {
                cur.len += len;
                return;
            }
        }
        self.spans.push(Span { x, len });
    }
}
