// Copyright (c) 2025 - Cowboy AI, Inc.
//! Model Inspector
//!
//! Prints schema descriptors and runs decode/encode passes over JSON files.
//!
//! Usage:
//!   tfmodel-inspect kinds
//!   tfmodel-inspect describe <kind>
//!   tfmodel-inspect decode <kind> <api-record.json>
//!   tfmodel-inspect encode <kind> <model.json>
//!
//! Configuration comes from `TFMODEL_*` environment variables, log level
//! from `RUST_LOG`. Results go to stdout, logs and diagnostics to stderr.

use anyhow::{bail, Context, Result};
use cim_tfmodel::{describe, validate, Diagnostics, Mapper, MapperConfig, ResourceKind};
use serde_json::Value as JsonValue;
use std::path::Path;
use tracing::{debug, info};

const USAGE: &str = "usage: tfmodel-inspect <kinds | describe KIND | decode KIND FILE | encode KIND FILE>";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = MapperConfig::from_env().context("Invalid TFMODEL_* configuration")?;
    debug!(?config, "Configuration loaded");
    let mapper = Mapper::new(config);

    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = raw_args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["kinds"] => {
            for kind in ResourceKind::ALL {
                println!("{}", kind);
            }
            Ok(())
        }
        ["describe", kind] => {
            let kind: ResourceKind = kind.parse()?;
            print_json(&describe(kind).to_json())
        }
        ["decode", kind, file] => {
            let kind: ResourceKind = kind.parse()?;
            let record = read_json(Path::new(file))?;
            info!("🔄 Decoding {} record from {}", kind, file);

            let (model, diagnostics) = mapper.decode(describe(kind), Some(&record));
            report(&diagnostics);
            match model {
                Some(model) => print_json(&model.to_json()),
                None => bail!("decode failed with {} error(s)", diagnostics.error_count()),
            }
        }
        ["encode", kind, file] => {
            let kind: ResourceKind = kind.parse()?;
            let schema = describe(kind);
            let document = read_json(Path::new(file))?;
            info!("🔄 Encoding {} model from {}", kind, file);

            let (model, mut diagnostics) = mapper.read_model(schema, &document);
            let Some(model) = model else {
                report(&diagnostics);
                bail!("model document has {} error(s)", diagnostics.error_count());
            };

            diagnostics.extend(validate(schema, &model));
            if diagnostics.has_error() {
                report(&diagnostics);
                bail!("model failed validation with {} error(s)", diagnostics.error_count());
            }

            let (body, encoded) = mapper.encode(schema, &model);
            diagnostics.extend(encoded);
            report(&diagnostics);
            diagnostics.into_result()?;
            print_json(&body)
        }
        _ => bail!(USAGE),
    }
}

fn read_json(path: &Path) -> Result<JsonValue> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn print_json(value: &JsonValue) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic);
    }
}
