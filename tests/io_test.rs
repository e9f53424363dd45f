//! File round trips and the size sweep.

mod common;

use std::fs;
use std::path::PathBuf;

use stable_match::cli::sweep::{run_sweep, SweepConfig};
use stable_match::io::{
    read_instance_from_path, read_matching, write_instance_to_path, write_matching_to_path,
};
use stable_match::{verify, Error, ParseError};

use common::random_instance;

/// Fresh scratch directory for one test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("stable-match-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_instance_and_matching_round_trip() {
    let dir = scratch_dir("round-trip");
    let input = dir.join("input_20.txt");
    let output = dir.join("output_20.txt");

    let instance = random_instance(20, 8);
    write_instance_to_path(&input, &instance).unwrap();

    let loaded = read_instance_from_path(&input).unwrap();
    assert_eq!(loaded, instance);

    let result = loaded.solve().unwrap();
    write_matching_to_path(&output, result.pairs()).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 20);
    assert!(text.lines().all(|line| line.split(' ').count() == 2));

    let pairs = read_matching(text.as_bytes()).unwrap();
    assert_eq!(pairs, result.pairs());
    assert_eq!(verify(&instance, &pairs), Ok(()));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = scratch_dir("missing");
    let err = read_instance_from_path(dir.join("nope.txt")).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));

    // Converts into the crate-level error.
    let err: Error = err.into();
    assert!(matches!(err, Error::Parse(ParseError::Io(_))));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_sweep_writes_every_size() {
    let dir = scratch_dir("sweep");
    let config = SweepConfig {
        sizes: vec![3, 10, 25],
        seed: 2024,
        dir: dir.clone(),
        verify: true,
    };

    let mut reported = Vec::new();
    let receipts = run_sweep(&config, |receipt| reported.push(receipt.size)).unwrap();

    assert_eq!(reported, vec![3, 10, 25]);
    assert_eq!(receipts.len(), 3);

    for receipt in &receipts {
        let n = receipt.size as usize;
        let instance = read_instance_from_path(config.input_path(n)).unwrap();
        let pairs = read_matching(fs::File::open(config.output_path(n)).unwrap()).unwrap();

        assert_eq!(instance.size(), n);
        assert_eq!(verify(&instance, &pairs), Ok(()));
        assert_eq!(instance.solve().unwrap().state_root(), receipt.state_root);
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_sweep_is_reproducible() {
    let first = scratch_dir("sweep-a");
    let second = scratch_dir("sweep-b");

    let config = |dir: &PathBuf| SweepConfig {
        sizes: vec![5, 15],
        seed: 77,
        dir: dir.clone(),
        verify: false,
    };

    let a = run_sweep(&config(&first), |_| {}).unwrap();
    let b = run_sweep(&config(&second), |_| {}).unwrap();

    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.state_root, y.state_root);
    }
    assert_eq!(
        fs::read_to_string(first.join("input_15.txt")).unwrap(),
        fs::read_to_string(second.join("input_15.txt")).unwrap()
    );

    fs::remove_dir_all(&first).unwrap();
    fs::remove_dir_all(&second).unwrap();
}
