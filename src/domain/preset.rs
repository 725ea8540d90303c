//! The fixture sizes produced by the binary

use crate::domain::{GenerationParams, MAX_LINE_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Small,
    Medium,
    Large,
}

impl Preset {
    /// All presets in the order the binary generates them.
    pub const ALL: [Preset; 3] = [Preset::Small, Preset::Medium, Preset::Large];

    /// Base name of the fixture files, e.g. `small` for `small.in` and `small.out`
    pub fn name(self) -> &'static str {
        match self {
            Preset::Small => "small",
            Preset::Medium => "medium",
            Preset::Large => "large",
        }
    }

    pub fn params(self) -> GenerationParams {
        let (line_count, max_line_len) = match self {
            Preset::Small => (100, 32),
            Preset::Medium => (10_000, 1024),
            Preset::Large => (100_000, MAX_LINE_LEN),
        };
        GenerationParams::new(line_count).with_max_line_len(max_line_len)
    }
}
