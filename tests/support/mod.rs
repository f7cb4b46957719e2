#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use serde_json::{Value, json};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

pub fn marketplace_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_marketplace"))
}

/// Command for the CLI with the catalog/log environment cleared.
pub fn marketplace_command() -> Command {
    let mut cmd = Command::new(marketplace_binary());
    cmd.env_remove("MARKETPLACE_CATALOG");
    cmd.env_remove("MARKETPLACE_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn write_catalog(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate catalog file")?;
    serde_json::to_writer(&mut file, value)?;
    file.flush()?;
    Ok(file)
}

pub fn product(id: Value, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{title} description"),
        "price": "$10"
    })
}

/// Small catalog with mixed id representations and one fully populated product.
pub fn fixture_catalog() -> Value {
    json!({
        "recommended": [
            product(json!(1), "Alpha"),
            product(json!("beta"), "Beta"),
            product(json!(2), "Gamma")
        ],
        "popular": [
            {
                "id": 3,
                "title": "Delta",
                "description": "Delta description",
                "price": "$30",
                "label": "Hot",
                "compatibility": "Everywhere",
                "features": [
                    {"icon": "*", "title": "Sturdy", "description": "Built to last"}
                ]
            }
        ],
        "marketing": [
            product(json!(7), "Epsilon")
        ]
    })
}
