//! Mapping from rewritten-text offsets back to original source lines.
//!
//! Line starts of the original text are computed once and never change.
//! Each rewrite of the text records checkpoints pairing an offset in the
//! rewritten buffer with the original offset it came from; a lookup
//! binary-searches the checkpoints, then the line starts.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Checkpoint {
    rewritten: usize,
    original: usize,
}

#[derive(Debug, Clone)]
pub struct LineMap {
    line_starts: Vec<usize>,
    checkpoints: Vec<Checkpoint>,
}

impl LineMap {
    /// Build the identity mapping for `original`.
    pub fn new(original: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                original
                    .bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect();
        LineMap {
            line_starts,
            checkpoints: vec![Checkpoint {
                rewritten: 0,
                original: 0,
            }],
        }
    }

    /// Number of physical lines in the original text.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Declare that rewritten offset `rewritten` corresponds to original
    /// offset `original`. Offsets between checkpoints map linearly.
    ///
    /// Checkpoints must be recorded in non-decreasing order.
    pub fn record(&mut self, rewritten: usize, original: usize) {
        debug_assert!(self
            .checkpoints
            .last()
            .map_or(true, |last| last.rewritten <= rewritten && last.original <= original));
        self.checkpoints.push(Checkpoint {
            rewritten,
            original,
        });
    }

    /// Original offset of a rewritten offset.
    pub fn original_offset(&self, offset: usize) -> usize {
        let idx = self
            .checkpoints
            .partition_point(|cp| cp.rewritten <= offset)
            .saturating_sub(1);
        let cp = self.checkpoints[idx];
        cp.original + (offset - cp.rewritten)
    }

    /// 1-based original line of a rewritten offset.
    pub fn line_of(&self, offset: usize) -> usize {
        let original = self.original_offset(offset);
        self.line_starts.partition_point(|&start| start <= original)
    }
}
