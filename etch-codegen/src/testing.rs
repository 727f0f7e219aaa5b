//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use eyre::{Result, bail, eyre};

/// The declaration shape of a generated class, ignoring layout.
///
/// Two renderings with equal outlines declare the same class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    pub package: Option<String>,
    pub class_name: String,
    pub class_modifiers: Vec<String>,
    pub fields: Vec<MemberOutline>,
    pub methods: Vec<MemberOutline>,
}

/// A field or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberOutline {
    pub modifiers: Vec<String>,
    /// Field type or method return type.
    pub ty: String,
    pub name: String,
    /// Parameter list for methods, `None` for fields.
    pub params: Option<String>,
}

impl Outline {
    /// Extract the outline of a single-class Java source file.
    ///
    /// Comments are skipped and method bodies are not inspected.
    pub fn parse(source: &str) -> Result<Self> {
        let code = strip_comments(source);
        let mut outline = Outline::default();
        let mut depth = 0usize;
        let mut buf = String::new();

        for c in code.chars() {
            match c {
                '{' => {
                    let header = buf.trim();
                    match depth {
                        0 => outline.class_header(header)?,
                        1 => outline.methods.push(method(header)?),
                        _ => {}
                    }
                    buf.clear();
                    depth += 1;
                }
                '}' => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or_else(|| eyre!("unbalanced '}}'"))?;
                    buf.clear();
                }
                ';' => {
                    let statement = buf.trim();
                    match depth {
                        0 => outline.package_statement(statement)?,
                        1 => outline.fields.push(field(statement)?),
                        _ => {}
                    }
                    buf.clear();
                }
                _ if depth <= 1 => buf.push(c),
                _ => {}
            }
        }

        if depth != 0 {
            bail!("unbalanced '{{'");
        }
        if outline.class_name.is_empty() {
            bail!("no class declaration found");
        }
        Ok(outline)
    }

    fn class_header(&mut self, header: &str) -> Result<()> {
        let mut tokens = header.split_whitespace();
        for token in tokens.by_ref() {
            if token == "class" {
                break;
            }
            self.class_modifiers.push(token.to_string());
        }
        self.class_name = tokens
            .next()
            .ok_or_else(|| eyre!("class header without a name: '{header}'"))?
            .to_string();
        Ok(())
    }

    fn package_statement(&mut self, statement: &str) -> Result<()> {
        let package = statement
            .strip_prefix("package")
            .ok_or_else(|| eyre!("unexpected top-level statement: '{statement}'"))?;
        self.package = Some(package.trim().to_string());
        Ok(())
    }
}

fn field(statement: &str) -> Result<MemberOutline> {
    declaration(statement, None)
}

fn method(header: &str) -> Result<MemberOutline> {
    let (signature, rest) = header
        .split_once('(')
        .ok_or_else(|| eyre!("method header without parameters: '{header}'"))?;
    let params = rest
        .strip_suffix(')')
        .ok_or_else(|| eyre!("unterminated parameter list: '{header}'"))?;
    declaration(signature, Some(params.trim().to_string()))
}

fn declaration(text: &str, params: Option<String>) -> Result<MemberOutline> {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    let (Some(name), Some(ty)) = (tokens.pop(), tokens.pop()) else {
        bail!("malformed member declaration: '{text}'");
    };
    Ok(MemberOutline {
        modifiers: tokens.into_iter().map(String::from).collect(),
        ty: ty.to_string(),
        name: name.to_string(),
        params,
    })
}

/// Remove `/* */` and `//` comments.
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    loop {
        let block = rest.find("/*");
        let line = rest.find("//");
        let (start, is_block) = match (block, line) {
            (Some(b), Some(l)) if l < b => (l, false),
            (Some(b), _) => (b, true),
            (None, Some(l)) => (l, false),
            (None, None) => break,
        };
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        let end = if is_block {
            rest.find("*/").map_or(rest.len(), |i| i + 2)
        } else {
            rest.find('\n').unwrap_or(rest.len())
        };
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated code compiles.
pub trait CompileChecker {
    /// Check that the sources under the given directory compile.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// Java compile checker using `javac`.
pub struct JavacChecker;

impl JavacChecker {
    /// Check if `javac` can be run on this machine.
    pub fn is_available() -> bool {
        Command::new("javac")
            .arg("-version")
            .output()
            .is_ok_and(|output| output.status.success())
    }
}

impl CompileChecker for JavacChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let mut sources = Vec::new();
        collect_java_files(dir, &mut sources).map_err(|e| CompileError {
            message: format!("Failed to list sources in {}: {}", dir.display(), e),
            output: String::new(),
        })?;
        if sources.is_empty() {
            return Err(CompileError {
                message: format!("No .java files under {}", dir.display()),
                output: String::new(),
            });
        }

        let output = Command::new("javac")
            .arg("-d")
            .arg(dir.join("classes"))
            .args(&sources)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run javac: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(CompileError {
                message: "javac failed".to_string(),
                output: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

fn collect_java_files(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_java_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "java") {
            out.push(path);
        }
    }
    Ok(())
}

/// Assert that two strings are equal, reporting every differing line.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected == actual {
        return;
    }

    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();
    let diff: String = (0..expected_lines.len().max(actual_lines.len()))
        .filter_map(|i| {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");
            (exp != act).then(|| {
                format!("Line {}:\n  expected: {}\n  actual:   {}\n", i + 1, exp, act)
            })
        })
        .collect();

    if diff.is_empty() {
        panic!("Content mismatch in line endings or trailing newline");
    }
    panic!("Content mismatch:\n{}", diff);
}

/// Generate code into a temporary directory and return the path.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

/// Generate into a temporary directory and check that the result compiles.
pub fn assert_generates_valid_code<C>(
    generate: impl FnOnce(&Path) -> Result<()>,
    checker: &C,
) -> Result<()>
where
    C: CompileChecker,
{
    let temp_dir = generate_to_temp(generate)?;
    checker
        .check(temp_dir.path())
        .map_err(|e| eyre!("Compile check failed: {}", e))
}
