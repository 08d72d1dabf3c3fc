use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates that must stay free of UI and transport dependencies
const PURE_CRATES: &[&str] = &["pokedex-domain", "pokedex-shared"];

/// UI and transport crates the pure crates may not depend on
const UI_TRANSPORT_CRATES: &[&str] = &[
    "dioxus",
    "dioxus-desktop",
    "reqwest",
    "gloo-net",
    "web-sys",
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `None` for normal dependencies, `"dev"` or `"build"` otherwise
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = dependency_violations(&metadata);
    for package in metadata
        .packages
        .iter()
        .filter(|p| PURE_CRATES.contains(&p.name.as_str()))
    {
        let src = package
            .manifest_path
            .parent()
            .map(|dir| dir.join("src"))
            .context("manifest path has no parent")?;
        violations.extend(source_violations(&package.name, &src)?);
    }

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }

    for v in &violations {
        eprintln!("arch-check: {v}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

/// Forbidden normal dependencies declared in the manifests
fn dependency_violations(metadata: &Metadata) -> Vec<String> {
    let mut violations = Vec::new();

    for package in &metadata.packages {
        let forbidden: HashSet<&str> = match package.name.as_str() {
            "pokedex-domain" => UI_TRANSPORT_CRATES
                .iter()
                .copied()
                .chain(["pokedex-shared", "pokedex-player"])
                .collect(),
            "pokedex-shared" => UI_TRANSPORT_CRATES
                .iter()
                .copied()
                .chain(["pokedex-player"])
                .collect(),
            _ => continue,
        };

        for dep in package.dependencies.iter().filter(|d| d.kind.is_none()) {
            if forbidden.contains(dep.name.as_str()) {
                violations.push(format!("{} depends on {}", package.name, dep.name));
            }
        }
    }

    violations
}

/// Paths into UI or transport crates used from source files under `src`
fn source_violations(package: &str, src: &Path) -> anyhow::Result<Vec<String>> {
    let pattern =
        regex_lite::Regex::new(r"\b(dioxus|dioxus_desktop|reqwest|gloo_net|web_sys)::")
            .context("compiling source pattern")?;

    let mut violations = Vec::new();
    for file in rust_files(src)? {
        let text =
            fs::read_to_string(&file).with_context(|| format!("reading {}", file.display()))?;
        for (line_no, line) in text.lines().enumerate() {
            if let Some(m) = pattern.captures(line).and_then(|c| c.get(1)) {
                violations.push(format!(
                    "{package}: {}:{} uses {}",
                    file.display(),
                    line_no + 1,
                    m.as_str()
                ));
            }
        }
    }
    Ok(violations)
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    Ok(files)
}
