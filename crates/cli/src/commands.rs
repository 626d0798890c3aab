//! Command dispatch for the `enumkit` binary.
//!
//! Each command loads a definition file, runs one lookup and renders the
//! result as text (JSON for anything structured).

use std::path::Path;

use anyhow::Context;
use enumkit::{Enum, LookupConfig};
use serde_json::Value;

pub const USAGE: &str = "Usage: enumkit <command> <definition.json> [args...]

Commands:
  keys                    List keys in definition order
  values [key...]         Values for the given keys (all when omitted)
  label <key|value>       Label for a key, or for a value
  extra <key|value>       Extra metadata for a key, or for a value
  options [arg...]        Option records (see ENUMKIT_ARGU_TYPE, ENUMKIT_LABEL_KEY, ENUMKIT_VALUE_KEY)
  check <value> <key>     Whether <key> holds <value>

Arguments that parse as JSON are read as JSON values, everything else as a
string. Quote keys that look like JSON: `label '\"1\"'` looks up the key `1`,
while `label 1` looks up the value 1. `values` and the <key> of `check` always
take keys as written.";

/// Load and validate a definition file.
pub fn load_enum(path: &Path) -> anyhow::Result<Enum> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading definition file {}", path.display()))?;
    let instance: Enum = text
        .parse()
        .with_context(|| format!("parsing definition file {}", path.display()))?;
    tracing::info!(path = %path.display(), entries = instance.len(), "Loaded enum definition");
    Ok(instance)
}

/// Command-line arguments are JSON when they parse as JSON and plain strings
/// otherwise, so `1` is a number and `DRAFT` is a string.
fn parse_arg(arg: &str) -> Value {
    serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string()))
}

fn render(value: Option<&Value>) -> String {
    value.map_or_else(|| "null".to_string(), Value::to_string)
}

/// Run `args` (everything after the binary name) and return the output text.
pub fn run(args: &[String], lookup: &LookupConfig) -> anyhow::Result<String> {
    let (command, rest) = args.split_first().context(USAGE)?;
    let (path, rest) = rest
        .split_first()
        .with_context(|| format!("missing definition file\n\n{USAGE}"))?;
    let instance = load_enum(Path::new(path))?;

    tracing::debug!(command = %command, args = rest.len(), "Running command");
    let output = match command.as_str() {
        "keys" => instance.keys().collect::<Vec<_>>().join("\n"),
        "values" => serde_json::to_string(&instance.values(rest))?,
        "label" => {
            let arg = rest.first().context("label needs a key or value")?;
            render(instance.label(&parse_arg(arg)))
        }
        "extra" => {
            let arg = rest.first().context("extra needs a key or value")?;
            render(instance.extra(&parse_arg(arg)))
        }
        "options" => {
            let args: Vec<Value> = rest.iter().map(|arg| parse_arg(arg)).collect();
            serde_json::to_string_pretty(&instance.options_with(&args, lookup))?
        }
        "check" => {
            let [value, key] = rest else {
                anyhow::bail!("check needs <value> <key>");
            };
            instance.check(&parse_arg(value), key).to_string()
        }
        other => anyhow::bail!("Unknown command: {other}\n\n{USAGE}"),
    };
    Ok(output)
}
