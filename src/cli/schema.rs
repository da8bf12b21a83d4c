use crate::config::Config;
use schemars::schema_for;
use std::io::Write;

/// JSON Schema for `pr-reader.yaml`, for editor validation.
fn config_schema() -> serde_json::Result<String> {
    let mut schema = schema_for!(Config);
    if let Some(metadata) = schema.schema.metadata.as_mut() {
        metadata.title = Some("pr-reader.yaml".to_string());
    }
    serde_json::to_string_pretty(&schema)
}

pub fn execute() -> anyhow::Result<()> {
    let json = config_schema()?;
    writeln!(std::io::stdout().lock(), "{}", json)?;
    Ok(())
}
