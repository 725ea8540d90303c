mod domain;
mod error;
mod generator;
mod output;
mod telemetry;

use std::io::Write;
use std::path::Path;

use rand::Rng;

pub use domain::{CharRange, GenerationParams, MAX_LINE_LEN, Preset};
pub use error::Error;
pub use generator::{
    DEFAULT_SEED, GeneratedLine, LineGenerator, LineOrigin, rotate_left, seeded_rng,
};
pub use output::FixtureSummary;
pub use telemetry::setup_logging;

use output::FixtureWriter;

/// Generates the fixture `name` in `dir`: `{name}.in` holds every generated line, `{name}.out`
/// only the fresh ones in order of creation.
///
/// Existing files are overwritten. The parameters are validated before any file is created.
/// Lines are drawn from `rng`; successive calls with the same generator continue its stream,
/// so the driver seeds one generator and threads it through all fixtures.
///
/// # Example
///
/// ```no_run
/// use cyclic_fixtures::{GenerationParams, generate, seeded_rng};
///
/// let mut rng = seeded_rng(0);
/// let params = GenerationParams::new(100).with_max_line_len(32);
/// let summary = generate(std::path::Path::new("."), "small", &params, &mut rng).unwrap();
/// assert_eq!(summary.input_lines, 100);
/// ```
pub fn generate<R: Rng + ?Sized>(
    dir: &Path,
    name: &str,
    params: &GenerationParams,
    rng: &mut R,
) -> Result<FixtureSummary, Error> {
    let lines = LineGenerator::new(params, rng)?;
    let writer = FixtureWriter::create(dir, name)?;
    let (_, _, summary) = write_fixture(writer, lines)?;
    Ok(summary)
}

/// Same as [`generate`], but writes the input and the expected output to the given writers.
/// Returns the writers after flushing them.
pub fn generate_into<W: Write, R: Rng + ?Sized>(
    input: W,
    output: W,
    params: &GenerationParams,
    rng: &mut R,
) -> Result<(W, W, FixtureSummary), Error> {
    let lines = LineGenerator::new(params, rng)?;
    write_fixture(FixtureWriter::new(input, output), lines)
}

fn write_fixture<W: Write>(
    mut writer: FixtureWriter<W>,
    lines: impl Iterator<Item = GeneratedLine>,
) -> Result<(W, W, FixtureSummary), Error> {
    for line in lines {
        writer.write_line(&line)?;
    }
    writer.finish()
}
