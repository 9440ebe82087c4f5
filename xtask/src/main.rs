//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use idguard_test_util::normalize_nondeterministic;
use schemars::schema_for;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            // Fallback: assume we're in xtask dir or use current dir
            std::env::current_dir().expect("Cannot determine current directory")
        });

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .expect("xtask has no parent")
            .to_path_buf()
    } else {
        manifest_dir
    }
}

/// Get the schemas directory path.
fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Get the golden fixtures directory path.
fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

/// Generate the IdguardReport schema.
fn generate_report_schema() -> schemars::Schema {
    schema_for!(idguard_types::IdguardReport)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![SchemaSpec {
        filename: "idguard.report.v1.json",
        generate: generate_report_schema,
    }]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();

    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create schemas directory")?;
    }

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate golden fixture reports against idguard.report.v1");
    eprintln!("  conform-full      conform + run the idguard binary on every fixture");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

/// Token pattern for codes and check id segments.
fn is_valid_token(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Check that a path is clean: no absolute paths, no `../`, forward slashes only.
fn is_clean_path(path: &str) -> bool {
    !(path.starts_with('/')
        || path.starts_with('\\')
        || path.contains("..")
        || path.contains('\\')
        // Reject Windows-style drive letters like C:
        || (path.len() >= 2 && path.as_bytes()[1] == b':'))
}

/// Compile the in-memory report schema.
fn compile_report_schema() -> anyhow::Result<jsonschema::Validator> {
    let schema_value =
        serde_json::to_value(generate_report_schema()).context("Failed to serialize schema")?;
    jsonschema::draft202012::new(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))
}

/// Fixture directories that carry a golden report, sorted by name.
fn golden_fixtures() -> anyhow::Result<Vec<(String, PathBuf)>> {
    let dir = fixtures_dir();
    let mut out = Vec::new();
    for entry in fs::read_dir(&dir).context("Failed to read tests/fixtures/")? {
        let path = entry?.path();
        if path.join("expected.report.json").is_file() && path.join("repo").is_dir() {
            let name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            out.push((name, path));
        }
    }
    out.sort();
    Ok(out)
}

/// Hygiene checks the schema cannot express.
fn report_hygiene(label: &str, report: &Value, errors: &mut Vec<String>) {
    let files = report.get("files").and_then(Value::as_array);
    for (i, file) in files.into_iter().flatten().enumerate() {
        if let Some(path) = file.get("path").and_then(Value::as_str)
            && !is_clean_path(path)
        {
            errors.push(format!(
                "{}: files[{}].path '{}' is not clean (no absolute, no ../, forward slashes only)",
                label, i, path
            ));
        }

        let Some(finding) = file.get("finding") else {
            continue;
        };
        if let Some(path) = finding
            .get("location")
            .and_then(|l| l.get("path"))
            .and_then(Value::as_str)
            && !is_clean_path(path)
        {
            errors.push(format!(
                "{}: files[{}].finding.location.path '{}' is not clean",
                label, i, path
            ));
        }
        if let Some(code) = finding.get("code").and_then(Value::as_str)
            && !is_valid_token(code)
        {
            errors.push(format!(
                "{}: files[{}].finding.code '{}' is not a valid token",
                label, i, code
            ));
        }
        if let Some(check_id) = finding.get("check_id").and_then(Value::as_str)
            && !check_id.split('.').all(is_valid_token)
        {
            errors.push(format!(
                "{}: files[{}].finding.check_id '{}' is not a valid dotted token",
                label, i, check_id
            ));
        }
    }
}

/// Validate golden fixture reports.
///
/// This checks:
/// 1. Schema validation against the schema generated from `IdguardReport`
/// 2. Path hygiene: no absolute paths, no `../`, forward slashes only
/// 3. Token hygiene: finding codes and check id segments
fn conform() -> anyhow::Result<()> {
    let compiled = compile_report_schema()?;
    println!("✓ idguard.report.v1 schema compiles");

    let fixtures = golden_fixtures()?;
    if fixtures.is_empty() {
        bail!("No golden fixtures found in {}", fixtures_dir().display());
    }

    let mut errors = Vec::new();
    for (name, dir) in &fixtures {
        let value = read_json(&dir.join("expected.report.json"))?;

        for err in compiled.iter_errors(&value) {
            errors.push(format!("{}: schema validation: {}", name, err));
        }
        report_hygiene(name, &value, &mut errors);

        println!("  ✓ {} validates", name);
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!(
        "\n✓ All {} golden fixtures pass conformance checks!",
        fixtures.len()
    );
    Ok(())
}

/// Full conformance: golden fixtures + idguard binary output.
///
/// Runs the built binary with `check --format json` inside every fixture's
/// `repo/`, validates the output against the schema, and compares it with the
/// golden report after normalization.
fn conform_full() -> anyhow::Result<()> {
    conform()?;

    println!("\n--- Full conformance: idguard binary output ---\n");

    let compiled = compile_report_schema()?;

    let idguard_bin = project_root().join("target").join("debug").join("idguard");

    #[cfg(target_os = "windows")]
    let idguard_bin = idguard_bin.with_extension("exe");

    if !idguard_bin.exists() {
        bail!(
            "idguard binary not found at {}.\n\
            Run `cargo build -p idguard-cli` first.",
            idguard_bin.display()
        );
    }

    let mut errors = Vec::new();

    for (name, dir) in golden_fixtures()? {
        let output = std::process::Command::new(&idguard_bin)
            .current_dir(dir.join("repo"))
            .args(["check", "--format", "json"])
            .output()
            .with_context(|| format!("Failed to run idguard on fixture '{}'", name))?;

        // 0 = pass, 2 = fail; anything else is a tool error.
        if !matches!(output.status.code(), Some(0) | Some(2)) {
            errors.push(format!(
                "fixture '{}': idguard exited with {:?}: {}",
                name,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr)
            ));
            continue;
        }

        let report: Value = serde_json::from_slice(&output.stdout)
            .with_context(|| format!("Failed to parse report for fixture '{}'", name))?;

        for err in compiled.iter_errors(&report) {
            errors.push(format!("fixture '{}': schema validation: {}", name, err));
        }
        report_hygiene(&name, &report, &mut errors);

        let golden = read_json(&dir.join("expected.report.json"))?;
        if normalize_nondeterministic(report) != normalize_nondeterministic(golden) {
            errors.push(format!(
                "fixture '{}': output differs from golden file expected.report.json",
                name
            ));
        } else {
            println!("  ✓ fixture '{}' matches golden report", name);
        }
    }

    if !errors.is_empty() {
        eprintln!("\nFull conformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!(
            "Full conformance validation failed with {} errors",
            errors.len()
        );
    }

    println!("\n✓ Full conformance checks passed!");
    Ok(())
}

/// Validate that all check IDs and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    use idguard_types::explain::{all_check_ids, all_codes, lookup_explanation};

    let check_ids = all_check_ids();
    let codes = all_codes();

    let mut errors = Vec::new();

    for (kind, ids) in [("Check ID", check_ids), ("Code", codes)] {
        for id in ids {
            match lookup_explanation(id) {
                Some(exp) => {
                    if exp.title.is_empty() {
                        errors.push(format!("{} '{}' has empty title", kind, id));
                    }
                    if exp.description.is_empty() {
                        errors.push(format!("{} '{}' has empty description", kind, id));
                    }
                    if exp.remediation.is_empty() {
                        errors.push(format!("{} '{}' has empty remediation", kind, id));
                    }
                    if exp.examples.before.is_empty() || exp.examples.after.is_empty() {
                        errors.push(format!("{} '{}' has an empty example", kind, id));
                    }
                }
                None => {
                    errors.push(format!("{} '{}' has no explanation", kind, id));
                }
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} check IDs have explanations", check_ids.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "conform-full" => conform_full(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
