use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use folio::{FolioError, config::LayoutMode};
use folio_cli::{Args, OutputFormat, run};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        format: None,
        width: None,
        mode: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_fixtures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let fixtures = collect_json_files(fixtures_dir());

    assert!(!fixtures.is_empty(), "No fixtures found in tests/fixtures/");

    let mut failed = Vec::new();

    for fixture in &fixtures {
        let stem = fixture
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();

        for mode in [LayoutMode::Simple, LayoutMode::Pattern] {
            for format in [OutputFormat::Svg, OutputFormat::Json] {
                let extension = match format {
                    OutputFormat::Svg => "svg",
                    OutputFormat::Json => "json",
                };
                let output = temp_dir.path().join(format!("{stem}-{mode}.{extension}"));
                let args = Args {
                    mode: Some(mode),
                    ..args_for(fixture, &output)
                };

                if let Err(e) = run(&args) {
                    failed.push((fixture.clone(), mode, e));
                } else {
                    assert!(output.exists(), "{} was not written", output.display());
                }
            }
        }
    }

    if !failed.is_empty() {
        eprintln!("\nFixtures that failed:");
        for (path, mode, err) in &failed {
            eprintln!("  - {} ({mode}): {}", path.display(), err);
        }
        panic!("{} fixture run(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_error_fixtures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let fixtures = collect_json_files(fixtures_dir().join("errors"));

    assert!(
        !fixtures.is_empty(),
        "No error fixtures found in tests/fixtures/errors/"
    );

    for fixture in &fixtures {
        let output = temp_dir.path().join("error.svg");
        let result = run(&args_for(fixture, &output));

        assert!(
            matches!(result, Err(FolioError::Parse { .. })),
            "{} should fail to parse, got {:?}",
            fixture.display(),
            result
        );
    }
}

#[test]
fn e2e_json_output_contains_placements() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("portfolio.json");
    let args = Args {
        mode: Some(LayoutMode::Pattern),
        width: Some(960.0),
        ..args_for(&fixtures_dir().join("portfolio.json"), &output)
    };

    run(&args).expect("Failed to run");

    let written = fs::read_to_string(&output).expect("Failed to read output");
    assert!(written.contains("\"containerWidth\": 960.0"));
    assert!(written.contains("\"pattern\": \"standalone\""));
    // The hidden item is dropped
    assert!(!written.contains("\"id\": 110"));
    assert!(written.contains("\"id\": 109"));
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = args_for(
        &temp_dir.path().join("missing.json"),
        &temp_dir.path().join("out.svg"),
    );

    assert!(matches!(run(&args), Err(FolioError::Io(_))));
}

#[test]
fn e2e_invalid_width_is_config_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = Args {
        width: Some(0.0),
        ..args_for(
            &fixtures_dir().join("empty.json"),
            &temp_dir.path().join("out.svg"),
        )
    };

    assert!(matches!(run(&args), Err(FolioError::Config(_))));
}
