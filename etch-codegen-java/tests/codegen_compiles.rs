//! Integration tests that verify generated code compiles successfully.
//!
//! These tests write generated classes into a temporary source tree and run
//! `javac` over it. They are skipped when no JDK is installed.

use etch_codegen::{
    pipeline::{Driver, DriverConfig},
    testing::{JavacChecker, assert_generates_valid_code},
};
use etch_codegen_java::emitter;
use etch_core::FsOutputArea;
use etch_ir::{MarkedDeclaration, Modifier, Round};
use etch_manifest::{ClassTemplate, FieldTemplate, MethodTemplate, Strategy};

const MARKER: &str = "com.bert.annotations.CusAnnotation";

fn assert_round_compiles(strategy: Strategy, template: ClassTemplate, round: Round) {
    if !JavacChecker::is_available() {
        eprintln!("javac not found, skipping compile check");
        return;
    }

    assert_generates_valid_code(
        |dir| {
            let mut driver = Driver::new(
                DriverConfig::new(MARKER).class_name(&template.class_name),
                emitter(strategy, template),
                FsOutputArea::new(dir),
            );
            driver.run_round(&round)?;
            Ok(())
        },
        &JavacChecker,
    )
    .unwrap();
}

fn round() -> Round {
    Round::new([
        MarkedDeclaration::new(MARKER, "com.example").element("MainActivity"),
        MarkedDeclaration::new(MARKER, "org.acme.app").element("Launcher"),
        MarkedDeclaration::new(MARKER, "").element("Root"),
    ])
}

fn accessor_template() -> ClassTemplate {
    ClassTemplate::new("Generated")
        .doc("Accessors.")
        .modifier(Modifier::Public)
        .field(FieldTemplate::new("count", "long").modifier(Modifier::Private))
        .field(FieldTemplate::new("labels", "java.lang.String[]").modifier(Modifier::Private))
        .method(
            MethodTemplate::new("getCount")
                .returns("long")
                .modifier(Modifier::Public)
                .line("return count;"),
        )
        .method(
            MethodTemplate::new("reset")
                .modifier(Modifier::Public)
                .line("count = 0;")
                .line("labels = null;"),
        )
}

#[test]
fn test_structured_default_compiles() {
    assert_round_compiles(Strategy::Structured, ClassTemplate::default(), round());
}

#[test]
fn test_raw_text_default_compiles() {
    assert_round_compiles(Strategy::RawText, ClassTemplate::default(), round());
}

#[test]
fn test_structured_accessors_compile() {
    assert_round_compiles(Strategy::Structured, accessor_template(), round());
}

#[test]
fn test_raw_text_accessors_compile() {
    assert_round_compiles(Strategy::RawText, accessor_template(), round());
}
