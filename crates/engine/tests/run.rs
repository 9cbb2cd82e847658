// crates/engine/tests/run.rs
use linecheck_engine::config::ConfigBuilder;
use linecheck_engine::manifest::{InputFile, Manifest};
use linecheck_engine::options::TerminatorMode;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn case_study(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (suffix, contents) in files {
        let path = dir.path().join(suffix);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
    }
    dir
}

fn manifest(root: &Path, suffixes: &[&str]) -> Manifest {
    Manifest {
        root: root.to_path_buf(),
        files: suffixes.iter().map(|s| InputFile::from_suffix(*s)).collect(),
    }
}

#[test]
fn reports_counts_in_manifest_order() {
    let big = "row\n".repeat(500);
    let dir = case_study(&[
        ("in/big.csv", big.as_str()),
        ("in/small.csv", "a\nb\nc"),
        ("in/empty.dat", ""),
    ]);
    let config = ConfigBuilder::default()
        .manifest(manifest(dir.path(), &["in/small.csv", "in/big.csv", "in/empty.dat"]))
        .build()
        .unwrap();

    let mut seen = Vec::new();
    let result = linecheck_engine::run(&config, |c| {
        seen.push((c.label.clone(), c.lines.value()));
        Ok(())
    })
    .unwrap();

    assert_eq!(
        seen,
        vec![("small".to_string(), 3), ("big".to_string(), 500), ("empty".to_string(), 0)]
    );
    assert!(result.is_clean());
    assert_eq!(result.total_lines(), 503usize);
    assert_eq!(result.counts[1].path, dir.path().join("in").join("big.csv"));
}

#[test]
fn missing_file_stops_the_run() {
    let dir = case_study(&[("a.csv", "1\n"), ("c.csv", "1\n2\n")]);
    let config = ConfigBuilder::default()
        .manifest(manifest(dir.path(), &["a.csv", "b.csv", "c.csv"]))
        .build()
        .unwrap();

    let mut seen = Vec::new();
    let err = linecheck_engine::run(&config, |c| {
        seen.push(c.label.clone());
        Ok(())
    })
    .unwrap_err();

    assert!(err.is_file_access());
    assert!(err.to_string().contains("b.csv"));
    assert_eq!(seen, vec!["a".to_string()]);
}

#[test]
fn keep_going_collects_failures_and_continues() {
    let dir = case_study(&[("a.csv", "1\n"), ("c.csv", "1\n2\n")]);
    let config = ConfigBuilder::default()
        .manifest(manifest(dir.path(), &["a.csv", "b.csv", "c.csv"]))
        .keep_going(true)
        .build()
        .unwrap();

    let mut seen = Vec::new();
    let result = linecheck_engine::run(&config, |c| {
        seen.push(c.label.clone());
        Ok(())
    })
    .unwrap();

    assert_eq!(seen, vec!["a".to_string(), "c".to_string()]);
    assert!(!result.is_clean());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].0, dir.path().join("b.csv"));
}

#[test]
fn terminator_mode_is_applied() {
    let dir = case_study(&[("mac.dat", "a\rb\rc\r")]);
    let base = manifest(dir.path(), &["mac.dat"]);

    let universal = ConfigBuilder::default().manifest(base.clone()).build().unwrap();
    let lf = ConfigBuilder::default()
        .manifest(base)
        .terminators(TerminatorMode::Lf)
        .build()
        .unwrap();

    let u = linecheck_engine::run(&universal, |_| Ok(())).unwrap();
    let l = linecheck_engine::run(&lf, |_| Ok(())).unwrap();
    assert_eq!(u.counts[0].lines, 3usize);
    assert_eq!(l.counts[0].lines, 1usize);
}

#[test]
fn report_failure_stops_the_run() {
    let dir = case_study(&[("a.csv", "1\n"), ("b.csv", "1\n")]);
    let config = ConfigBuilder::default()
        .manifest(manifest(dir.path(), &["a.csv", "b.csv"]))
        .keep_going(true)
        .build()
        .unwrap();

    let mut calls = 0;
    let err = linecheck_engine::run(&config, |_| {
        calls += 1;
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    })
    .unwrap_err();

    assert_eq!(calls, 1);
    assert!(!err.is_file_access());
}
