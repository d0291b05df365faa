//! Developer tasks (schema generation, fixture checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        let parent = manifest_dir.parent().context("xtask has no parent")?;
        Ok(parent.to_path_buf())
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    /// Schema id carried in documents of this shape, when they carry one.
    id: Option<&'static str>,
    generate: fn() -> schemars::Schema,
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "depgate.report.v1.json",
            id: Some(depgate_types::SCHEMA_REPORT_V1),
            generate: || schema_for!(depgate_types::ReportEnvelope),
        },
        SchemaSpec {
            filename: "depgate.config.v1.json",
            id: Some(depgate_types::ids::SCHEMA_CONFIG_V1),
            generate: || schema_for!(depgate_settings::DepgateConfigV1),
        },
        SchemaSpec {
            filename: "depgate.payload.json",
            id: None,
            generate: || schema_for!(depgate_types::ScanPayload),
        },
        SchemaSpec {
            filename: "depgate.ignore.json",
            id: None,
            generate: || schema_for!(depgate_settings::IgnoreFileV1),
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Fails when a checked-in schema differs from what the types generate.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut stale = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path).unwrap_or_default();
        if expected != actual {
            stale.push(spec.filename);
        }
    }

    if stale.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    eprintln!("Schemas missing or out of date:");
    for name in &stale {
        eprintln!("  - {}", name);
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Parse every fixture file with the same code paths the CLI uses.
fn check_fixtures() -> anyhow::Result<()> {
    let dir = fixtures_dir()?;
    let mut count = 0;

    for entry in fs::read_dir(&dir).with_context(|| format!("read {}", dir.display()))? {
        let fixture = entry?.path();
        if !fixture.is_dir() {
            continue;
        }
        check_fixture(&fixture)
            .with_context(|| format!("fixture {}", fixture.display()))?;
        count += 1;
    }

    println!("{count} fixtures parsed.");
    Ok(())
}

fn check_fixture(fixture: &Path) -> anyhow::Result<()> {
    let payload = fs::read_to_string(fixture.join("depgate-payload.json"))
        .context("read depgate-payload.json")?;
    let _: depgate_types::ScanPayload =
        serde_json::from_str(&payload).context("parse depgate-payload.json")?;

    let config = fixture.join(depgate_settings::CONFIG_FILE_NAME);
    if config.exists() {
        let text = fs::read_to_string(&config).context("read config")?;
        depgate_settings::parse_config_toml(&text)?;
    }

    let ignore = fixture.join(depgate_settings::IGNORE_FILE_NAME);
    if ignore.exists() {
        let text = fs::read_to_string(&ignore).context("read ignore file")?;
        depgate_settings::parse_ignore_file(&text)?;
    }

    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print the schema ids carried by depgate documents");
    eprintln!("  check-fixtures    Parse every CLI fixture under tests/fixtures/");
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
        "check-fixtures" => check_fixtures(),
        "print-schema-ids" => {
            for id in schema_specs().iter().filter_map(|spec| spec.id) {
                println!("{}", id);
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
