//! Snapshot tests for the text produced by each emission strategy.

use etch_codegen_java::{EmissionStrategy, RawTextEmitter, StructuredBuilder};
use etch_ir::{GenerationRequest, Modifier};
use etch_manifest::{ClassTemplate, FieldTemplate, MethodTemplate};

fn request(namespace: &str) -> GenerationRequest {
    GenerationRequest::new(namespace, "AutoClazz")
}

fn bean_template() -> ClassTemplate {
    ClassTemplate::new("Person")
        .doc("A generated bean.\nDo not edit.")
        .modifier(Modifier::Public)
        .field(FieldTemplate::new("name", "String").modifier(Modifier::Private))
        .field(
            FieldTemplate::new("tags", "java.util.List[]")
                .modifier(Modifier::Final)
                .modifier(Modifier::Private),
        )
        .method(
            MethodTemplate::new("getName")
                .returns("String")
                .modifier(Modifier::Public)
                .line("return name;"),
        )
        .method(
            MethodTemplate::new("reset")
                .modifier(Modifier::Synchronized)
                .modifier(Modifier::Public)
                .line("name = null;")
                .line("tags = null;"),
        )
}

#[test]
fn structured_default_template() {
    let artifact = StructuredBuilder::new(ClassTemplate::default())
        .render(&request("com.example"))
        .unwrap();

    assert_eq!(artifact.fully_qualified_name, "com.example.AutoClazz");
    insta::assert_snapshot!(artifact.content, @r"
package com.example;

/**
 * This class is generated by etch, do not edit.
 */
public final class AutoClazz {
  private int age;

  private void getAge() {
  }
}
");
}

#[test]
fn raw_text_default_template() {
    let artifact = RawTextEmitter::new(ClassTemplate::default())
        .render(&request("com.example"))
        .unwrap();

    assert_eq!(artifact.fully_qualified_name, "com.example.AutoClazz");
    insta::assert_snapshot!(artifact.content, @r"
package com.example;
/** This class is generated by etch, do not edit. */
public final class AutoClazz {
private int age;
private void getAge() {}
}
");
}

#[test]
fn structured_unnamed_package() {
    let artifact = StructuredBuilder::new(ClassTemplate::default())
        .render(&request(""))
        .unwrap();

    assert_eq!(artifact.fully_qualified_name, "AutoClazz");
    insta::assert_snapshot!(artifact.content, @r"
/**
 * This class is generated by etch, do not edit.
 */
public final class AutoClazz {
  private int age;

  private void getAge() {
  }
}
");
}

#[test]
fn structured_custom_template() {
    let artifact = StructuredBuilder::new(bean_template())
        .render(&GenerationRequest::new("org.acme.model", "Person"))
        .unwrap();

    insta::assert_snapshot!(artifact.content, @r"
package org.acme.model;

/**
 * A generated bean.
 * Do not edit.
 */
public class Person {
  private String name;

  private final java.util.List[] tags;

  public String getName() {
    return name;
  }

  public synchronized void reset() {
    name = null;
    tags = null;
  }
}
");
}

#[test]
fn raw_text_custom_template() {
    let artifact = RawTextEmitter::new(bean_template())
        .render(&GenerationRequest::new("org.acme.model", "Person"))
        .unwrap();

    insta::assert_snapshot!(artifact.content, @r"
package org.acme.model;
/** A generated bean.
 * Do not edit. */
public class Person {
private String name;
private final java.util.List[] tags;
public String getName() {
  return name;
}
public synchronized void reset() {
  name = null;
  tags = null;
}
}
");
}
