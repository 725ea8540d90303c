//! Integration tests generating fixtures on disk through the public API

use claims::{assert_matches, assert_ok};
use cyclic_fixtures::{
    CharRange, Error, GenerationParams, LineGenerator, Preset, generate, generate_into,
    seeded_rng,
};

use crate::read_lines;

#[test]
fn single_character_alphabet() {
    let dir = tempfile::tempdir().unwrap();
    let params = GenerationParams::new(5)
        .with_reuse_chance(0.0)
        .with_min_line_len(3)
        .with_max_line_len(3)
        .with_char_range(assert_ok!(CharRange::new(65..66)));
    let mut rng = seeded_rng(0);

    let summary = assert_ok!(generate(dir.path(), "t", &params, &mut rng));

    // without reuse every line is fresh, identical content or not
    assert_eq!(summary.input_lines, 5);
    assert_eq!(summary.output_lines, 5);
    assert_eq!(read_lines(&dir.path().join("t.in")), vec!["AAA"; 5]);
    assert_eq!(read_lines(&dir.path().join("t.out")), vec!["AAA"; 5]);
}

#[test]
fn output_is_the_fresh_subsequence_of_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let params = GenerationParams::new(1000).with_max_line_len(50);

    assert_ok!(generate(dir.path(), "replay", &params, &mut seeded_rng(9)));

    // replaying the stream tells which input positions were fresh
    let mut rng = seeded_rng(9);
    let replayed: Vec<_> = assert_ok!(LineGenerator::new(&params, &mut rng)).collect();

    let input = read_lines(&dir.path().join("replay.in"));
    let output = read_lines(&dir.path().join("replay.out"));
    let expected_output: Vec<&String> = input
        .iter()
        .zip(&replayed)
        .filter(|(_, line)| line.is_fresh())
        .map(|(text, _)| text)
        .collect();

    assert_eq!(input.len(), 1000);
    assert_eq!(output.iter().collect::<Vec<_>>(), expected_output);
    assert!(output.len() < input.len());
}

#[test]
fn same_seed_gives_byte_identical_files() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let params = Preset::Small.params();

    assert_ok!(generate(first.path(), "small", &params, &mut seeded_rng(0)));
    assert_ok!(generate(second.path(), "small", &params, &mut seeded_rng(0)));

    for file in ["small.in", "small.out"] {
        assert_eq!(
            std::fs::read(first.path().join(file)).unwrap(),
            std::fs::read(second.path().join(file)).unwrap(),
            "{file} differs"
        );
    }
}

#[test]
fn successive_fixtures_continue_one_stream() {
    let dir = tempfile::tempdir().unwrap();
    let params = GenerationParams::new(30).with_max_line_len(16);

    let mut shared = seeded_rng(0);
    assert_ok!(generate(dir.path(), "first", &params, &mut shared));
    assert_ok!(generate(dir.path(), "second", &params, &mut shared));

    let mut fresh = seeded_rng(0);
    assert_ok!(generate(dir.path(), "restarted", &params, &mut fresh));

    assert_eq!(
        read_lines(&dir.path().join("first.in")),
        read_lines(&dir.path().join("restarted.in"))
    );
    assert_ne!(
        read_lines(&dir.path().join("second.in")),
        read_lines(&dir.path().join("restarted.in"))
    );
}

#[test]
fn in_memory_generation_matches_files() {
    let dir = tempfile::tempdir().unwrap();
    let params = GenerationParams::new(200).with_max_line_len(24);

    let disk_summary = assert_ok!(generate(dir.path(), "mem", &params, &mut seeded_rng(4)));
    let (input, output, summary) = assert_ok!(generate_into(
        Vec::new(),
        Vec::new(),
        &params,
        &mut seeded_rng(4)
    ));

    assert_eq!(summary, disk_summary);
    assert_eq!(input, std::fs::read(dir.path().join("mem.in")).unwrap());
    assert_eq!(output, std::fs::read(dir.path().join("mem.out")).unwrap());
}

#[test]
fn invalid_parameters_leave_no_files_behind() {
    let dir = tempfile::tempdir().unwrap();
    let params = GenerationParams::new(10).with_reuse_chance(2.0);

    let result = generate(dir.path(), "bad", &params, &mut seeded_rng(0));

    assert_matches!(result, Err(Error::InvalidParameters { .. }));
    assert!(!dir.path().join("bad.in").exists());
    assert!(!dir.path().join("bad.out").exists());
}

#[test]
fn existing_fixtures_are_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let params = GenerationParams::new(10).with_max_line_len(8);

    assert_ok!(generate(
        dir.path(),
        "t",
        &GenerationParams::new(500),
        &mut seeded_rng(1)
    ));
    assert_ok!(generate(dir.path(), "t", &params, &mut seeded_rng(1)));

    assert_eq!(read_lines(&dir.path().join("t.in")).len(), 10);
}

#[test]
fn small_preset_shape() {
    let dir = tempfile::tempdir().unwrap();
    let params = Preset::Small.params();

    let summary = assert_ok!(generate(dir.path(), "small", &params, &mut seeded_rng(0)));

    let input = read_lines(&dir.path().join("small.in"));
    let output = read_lines(&dir.path().join("small.out"));
    assert_eq!(input.len(), 100);
    assert_eq!(summary.output_lines, output.len());
    assert!(
        (20..=80).contains(&output.len()),
        "about half the lines should be fresh, got {}",
        output.len()
    );
    assert!(
        input
            .iter()
            .all(|line| (4..=32).contains(&line.chars().count()))
    );
}
