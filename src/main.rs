use anyhow::Result;
use cyclic_fixtures::{DEFAULT_SEED, Preset, generate, seeded_rng, setup_logging};
use tracing::info;

fn main() -> Result<()> {
    setup_logging()?;

    let dir = std::env::current_dir()?;
    // one stream for all presets, consumed in order
    let mut rng = seeded_rng(DEFAULT_SEED);

    for preset in Preset::ALL {
        let summary = generate(&dir, preset.name(), &preset.params(), &mut rng)?;
        info!(fixture = preset.name(), %summary, "fixture written");
    }

    Ok(())
}
