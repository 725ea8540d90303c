//! Module for the types describing what a fixture looks like: its parameters and the built-in presets.

use std::ops::Range;

use rand::Rng;

use crate::error::{Error, invalid_parameters};

mod preset;

pub use preset::Preset;


/// The longest line the consuming line filter buffers. Used as the default maximum line length.
pub const MAX_LINE_LEN: usize = 4095;

const DEFAULT_REUSE_CHANCE: f64 = 0.5;
const DEFAULT_MIN_LINE_LEN: usize = 4;

/// A non-empty, contiguous range of code points from which line characters are drawn.
///
/// Every code point in the range is a valid `char` and none of them is a line break,
/// so sampling never fails and a generated line always stays on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRange {
    first: char,
    last: char,
}

impl CharRange {
    /// Builds the range `[code_points.start, code_points.end)`.
    pub fn new(code_points: Range<u32>) -> Result<Self, Error> {
        if code_points.is_empty() {
            return Err(invalid_parameters(format!(
                "character range {code_points:?} is empty"
            )));
        }
        let last_code_point = code_points.end - 1;
        let (Some(first), Some(last)) = (
            char::from_u32(code_points.start),
            char::from_u32(last_code_point),
        ) else {
            return Err(invalid_parameters(format!(
                "character range {code_points:?} exceeds the valid code points"
            )));
        };
        if code_points.start <= 0xDFFF && last_code_point >= 0xD800 {
            return Err(invalid_parameters(format!(
                "character range {code_points:?} contains surrogate code points"
            )));
        }
        if code_points.contains(&u32::from('\n')) || code_points.contains(&u32::from('\r')) {
            return Err(invalid_parameters(format!(
                "character range {code_points:?} contains line breaks"
            )));
        }
        Ok(Self { first, last })
    }

    /// Number of distinct characters in the range
    pub fn len(&self) -> usize {
        (u32::from(self.last) - u32::from(self.first)) as usize + 1
    }

    // never empty, see `new`
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, c: char) -> bool {
        (self.first..=self.last).contains(&c)
    }

    /// Draws one character uniformly from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        rng.random_range(self.first..=self.last)
    }
}

impl Default for CharRange {
    fn default() -> Self {
        Self {
            first: '?',
            last: '~',
        }
    }
}

/// The knobs of a single fixture.
///
/// Built with [`GenerationParams::new`] and adjusted with the `with_*` setters. The setters
/// don't check anything; [`GenerationParams::validate`] does, and generation calls it before
/// touching any file.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    line_count: usize,
    reuse_chance: f64,
    min_line_len: usize,
    max_line_len: usize,
    char_range: CharRange,
}

impl GenerationParams {
    /// Parameters for `line_count` lines with the defaults: reuse chance 0.5, line lengths in
    /// `[4, MAX_LINE_LEN]`, characters from `[63, 127)`.
    pub fn new(line_count: usize) -> Self {
        Self {
            line_count,
            reuse_chance: DEFAULT_REUSE_CHANCE,
            min_line_len: DEFAULT_MIN_LINE_LEN,
            max_line_len: MAX_LINE_LEN,
            char_range: CharRange::default(),
        }
    }

    pub fn with_reuse_chance(mut self, reuse_chance: f64) -> Self {
        self.reuse_chance = reuse_chance;
        self
    }

    pub fn with_min_line_len(mut self, min_line_len: usize) -> Self {
        self.min_line_len = min_line_len;
        self
    }

    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }

    pub fn with_char_range(mut self, char_range: CharRange) -> Self {
        self.char_range = char_range;
        self
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn reuse_chance(&self) -> f64 {
        self.reuse_chance
    }

    pub fn min_line_len(&self) -> usize {
        self.min_line_len
    }

    pub fn max_line_len(&self) -> usize {
        self.max_line_len
    }

    pub fn char_range(&self) -> CharRange {
        self.char_range
    }

    /// Checks that the parameters describe a fixture that can actually be generated.
    pub fn validate(&self) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.reuse_chance) {
            return Err(invalid_parameters(format!(
                "reuse chance {} is not within [0, 1]",
                self.reuse_chance
            )));
        }
        if self.min_line_len == 0 {
            return Err(invalid_parameters("minimum line length must be positive"));
        }
        if self.min_line_len > self.max_line_len {
            return Err(invalid_parameters(format!(
                "minimum line length {} exceeds maximum line length {}",
                self.min_line_len, self.max_line_len
            )));
        }
        Ok(())
    }
}
