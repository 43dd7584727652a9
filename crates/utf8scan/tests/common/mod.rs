#![allow(missing_docs)]
#![allow(dead_code)]

use utf8scan::ParseFailure;

/// The YAML document the host's smoke test feeds through the pipeline.
pub const PLANETS: &str = r#"
en: Planet (Gas)
fr: Planète (Gazeuse)
ru: Планета (Газ)
ja: 惑星（ガス）
zh: 行星（气体）
decode this: "\u263A \xE2\x98\xBA"
and this as well: "\u2705 \U0001D11E"
not decoded: '\u263A \xE2\x98\xBA'
"#;

/// Parses YAML with `serde_yaml` and re-serializes it with `serde_json`,
/// reporting syntax errors the way the host parser does.
pub fn yaml_to_json(document: &[u8]) -> Result<Vec<u8>, ParseFailure> {
    let value: serde_json::Value = serde_yaml::from_slice(document).map_err(|err| {
        let location = err.location();
        ParseFailure {
            message: err.to_string(),
            line: location.as_ref().map_or(0, serde_yaml::Location::line),
            column: location.as_ref().map_or(0, serde_yaml::Location::column),
            offset: location.as_ref().map_or(0, serde_yaml::Location::index),
        }
    })?;
    Ok(serde_json::to_vec(&value).expect("serde_json::Value always serializes"))
}
