//! End-to-end rounds through the driver with the Java strategies.

use std::fs;

use etch_codegen::{
    GenerateError,
    pipeline::{Driver, DriverConfig},
    testing::Outline,
};
use etch_codegen_java::emitter;
use etch_core::{FsOutputArea, MemoryOutputArea, OutputArea};
use etch_ir::{MarkedDeclaration, Round};
use etch_manifest::{ClassTemplate, Strategy};
use tempfile::TempDir;

const MARKER: &str = "com.bert.annotations.CusAnnotation";

fn driver<O: OutputArea>(strategy: Strategy, output: O) -> Driver<O> {
    Driver::new(
        DriverConfig::new(MARKER),
        emitter(strategy, ClassTemplate::default()),
        output,
    )
}

fn marked(namespace: &str, element: &str) -> MarkedDeclaration {
    MarkedDeclaration::new(MARKER, namespace).element(element)
}

#[test]
fn generates_auto_clazz_for_each_strategy() {
    for strategy in [Strategy::Structured, Strategy::RawText] {
        let mut driver = driver(strategy, MemoryOutputArea::new());
        let report = driver
            .run_round(&Round::new([marked("com.example", "MainActivity")]))
            .unwrap();

        assert!(report.claimed);
        assert_eq!(report.written, vec!["com.example.AutoClazz"]);

        let content = driver.output().get("com.example.AutoClazz").unwrap();
        let outline = Outline::parse(content).unwrap();
        assert_eq!(outline.package.as_deref(), Some("com.example"));
        assert_eq!(outline.fields[0].name, "age");
        assert_eq!(outline.methods[0].name, "getAge");
    }
}

#[test]
fn empty_round_is_not_claimed() {
    let mut driver = driver(Strategy::Structured, MemoryOutputArea::new());
    let report = driver.run_round(&Round::empty()).unwrap();

    assert!(!report.claimed);
    assert!(driver.output().is_empty());
}

#[test]
fn unrelated_marker_is_claimed_without_output() {
    let mut driver = driver(Strategy::RawText, MemoryOutputArea::new());
    let round = Round::new([MarkedDeclaration::new("org.other.Marker", "com.example")]);
    let report = driver.run_round(&round).unwrap();

    assert!(report.claimed);
    assert!(report.written.is_empty());
    assert!(driver.output().is_empty());
}

#[test]
fn duplicate_namespace_writes_once() {
    let mut driver = driver(Strategy::Structured, MemoryOutputArea::new());
    let round = Round::new([
        marked("com.example", "MainActivity"),
        marked("com.example", "SettingsActivity"),
    ]);
    let failure = driver.run_round(&round).unwrap_err();

    assert_eq!(failure.written, vec!["com.example.AutoClazz"]);
    assert_eq!(failure.failures.len(), 1);
    assert!(matches!(
        &failure.failures[0],
        GenerateError::DuplicateArtifact { name, .. } if name == "com.example.AutoClazz"
    ));
    assert_eq!(driver.output().len(), 1);
}

#[test]
fn read_only_output_fails_every_request() {
    let mut driver = driver(Strategy::Structured, MemoryOutputArea::read_only());
    let failure = driver
        .run_round(&Round::new([marked("com.a", "A"), marked("com.b", "B")]))
        .unwrap_err();

    assert!(failure.written.is_empty());
    assert_eq!(
        failure.failed_names().collect::<Vec<_>>(),
        vec!["com.a.AutoClazz", "com.b.AutoClazz"]
    );
    assert!(
        failure
            .failures
            .iter()
            .all(|e| matches!(e, GenerateError::Write(_)))
    );
}

#[test]
fn malformed_namespace_by_strategy() {
    let round = Round::new([marked("com..1bad", "Broken"), marked("com.good", "Fine")]);

    let mut structured = driver(Strategy::Structured, MemoryOutputArea::new());
    let failure = structured.run_round(&round).unwrap_err();
    assert_eq!(failure.written, vec!["com.good.AutoClazz"]);
    assert!(matches!(
        failure.failures[0],
        GenerateError::InvalidIdentifier { .. }
    ));

    let mut raw = driver(Strategy::RawText, MemoryOutputArea::new());
    let report = raw.run_round(&round).unwrap();
    assert_eq!(report.written, vec!["com..1bad.AutoClazz", "com.good.AutoClazz"]);
}

#[test]
fn malformed_namespace_is_rejected_by_filesystem() {
    let dir = TempDir::new().unwrap();
    let mut driver = driver(Strategy::RawText, FsOutputArea::new(dir.path()));
    let failure = driver
        .run_round(&Round::new([marked("com..1bad", "Broken")]))
        .unwrap_err();

    assert!(matches!(failure.failures[0], GenerateError::Write(_)));
    assert!(!dir.path().join("com").exists());
}

#[test]
fn writes_nested_java_files() {
    let dir = TempDir::new().unwrap();
    let mut driver = driver(Strategy::Structured, FsOutputArea::new(dir.path()));
    driver
        .run_round(&Round::new([marked("com.example", "Main"), marked("", "Root")]))
        .unwrap();

    let nested = fs::read_to_string(dir.path().join("com/example/AutoClazz.java")).unwrap();
    assert!(nested.starts_with("package com.example;\n"));
    let root = fs::read_to_string(dir.path().join("AutoClazz.java")).unwrap();
    assert!(root.starts_with("/**\n"));
}

#[test]
fn identical_rounds_produce_identical_output() {
    let round = Round::new([marked("com.a", "A"), marked("com.b", "B")]);

    for strategy in [Strategy::Structured, Strategy::RawText] {
        let mut first = driver(strategy, MemoryOutputArea::new());
        let mut second = driver(strategy, MemoryOutputArea::new());
        first.run_round(&round).unwrap();
        second.run_round(&round).unwrap();

        assert_eq!(first.into_output().into_files(), second.into_output().into_files());
    }
}

#[test]
fn rounds_do_not_share_names() {
    let mut driver = driver(Strategy::Structured, MemoryOutputArea::new());
    let round = Round::new([marked("com.example", "Main")]);
    let results = driver.run_rounds([&round, &round]);

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(driver.output().len(), 1);
}
