//! Module for the core logic of the generator: drawing fresh lines and rotating earlier ones.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::GenerationParams;
use crate::error::Error;


/// Seed used by the binary, so that repeated runs produce byte-identical fixtures.
pub const DEFAULT_SEED: u64 = 0;

/// Creates the pseudo-random generator driving a generation run.
///
/// ChaCha8 produces the same stream on every platform, which keeps checked-in fixtures reproducible.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Rotates `line` cyclically to the left by `offset` characters (`offset` is taken modulo the line length).
///
/// ```
/// use cyclic_fixtures::rotate_left;
///
/// assert_eq!(rotate_left("barracuda", 3), "racudabar");
/// ```
pub fn rotate_left(line: &str, offset: usize) -> String {
    let char_len = line.chars().count();
    if char_len == 0 {
        return String::new();
    }
    let offset = offset % char_len;
    let split = line
        .char_indices()
        .nth(offset)
        .map_or(line.len(), |(idx, _)| idx);
    let (head, tail) = line.split_at(split);

    let mut rotated = String::with_capacity(line.len());
    rotated.push_str(tail);
    rotated.push_str(head);
    rotated
}

/// How a line came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOrigin {
    /// Newly drawn; the line joins the pool and belongs to the expected output.
    Fresh,
    /// Rotation of the pool entry at index `source` by `offset` characters; input only.
    Rotated { source: usize, offset: usize },
}

/// A single line of the input fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLine {
    pub text: String,
    pub origin: LineOrigin,
}

impl GeneratedLine {
    pub fn is_fresh(&self) -> bool {
        self.origin == LineOrigin::Fresh
    }
}

#[derive(Debug)]
struct PoolEntry {
    text: String,
    char_len: usize,
}

/// The fresh lines drawn so far, in order of creation. Append-only.
#[derive(Debug, Default)]
pub(crate) struct LinePool {
    entries: Vec<PoolEntry>,
}

impl LinePool {
    fn push(&mut self, text: String, char_len: usize) {
        self.entries.push(PoolEntry { text, char_len });
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.text.as_str())
    }
}

/// Iterator yielding the lines of one fixture, in order.
///
/// Yields exactly `line_count` lines. Per line the random stream is consumed in a fixed order:
/// the reuse draw (only once the pool is non-empty), then either the pool index and the
/// rotation offset, or the line length followed by one draw per character.
///
/// Uniqueness is decided by the branch taken, never by content: two fresh lines that happen
/// to be equal are both fresh, and a rotation is never compared against the pool.
pub struct LineGenerator<'a, R: ?Sized> {
    params: &'a GenerationParams,
    rng: &'a mut R,
    pool: LinePool,
    remaining: usize,
}

impl<'a, R: Rng + ?Sized> LineGenerator<'a, R> {
    /// Validates `params` and prepares a generator drawing from `rng`.
    pub fn new(params: &'a GenerationParams, rng: &'a mut R) -> Result<Self, Error> {
        params.validate()?;
        Ok(Self {
            params,
            rng,
            pool: LinePool::default(),
            remaining: params.line_count(),
        })
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &LinePool {
        &self.pool
    }

    fn reuse_next(&mut self) -> bool {
        // short-circuit: an empty pool doesn't consume a draw
        !self.pool.is_empty() && self.rng.random::<f64>() < self.params.reuse_chance()
    }

    fn rotated_line(&mut self) -> GeneratedLine {
        let source = self.rng.random_range(0..self.pool.len());
        let entry = &self.pool.entries[source];
        let offset = self.rng.random_range(0..entry.char_len);
        GeneratedLine {
            text: rotate_left(&entry.text, offset),
            origin: LineOrigin::Rotated { source, offset },
        }
    }

    fn fresh_line(&mut self) -> GeneratedLine {
        let char_len = self
            .rng
            .random_range(self.params.min_line_len()..=self.params.max_line_len());
        let char_range = self.params.char_range();
        let text: String = (0..char_len)
            .map(|_| char_range.sample(&mut *self.rng))
            .collect();

        self.pool.push(text.clone(), char_len);
        GeneratedLine {
            text,
            origin: LineOrigin::Fresh,
        }
    }
}

impl<R: Rng + ?Sized> Iterator for LineGenerator<'_, R> {
    type Item = GeneratedLine;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let line = if self.reuse_next() {
            self.rotated_line()
        } else {
            self.fresh_line()
        };
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng + ?Sized> ExactSizeIterator for LineGenerator<'_, R> {}
