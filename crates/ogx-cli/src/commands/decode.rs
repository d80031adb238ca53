use std::io::Read;

use anyhow::Context;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DecodeArgs;
use crate::output::output;

/// Handle `ogx decode`. Works offline.
pub fn handle(args: &DecodeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    output(&decode_text(&text)?, flags.format)
}

fn decode_text(text: &str) -> anyhow::Result<Value> {
    let wire: Value = serde_json::from_str(text).context("input is not valid JSON")?;
    if !ogx_decode::contains_encoded_values(&wire) {
        tracing::debug!("input has no encoded values");
    }
    Ok(ogx_decode::decode(&wire))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_tagged_payload() {
        let text = r#"{"values": [{"structValue": {"fields": {"n": {"numberValue": 3}}}}]}"#;
        assert_eq!(decode_text(text).unwrap(), json!({"values": [{"n": 3}]}));
    }

    #[test]
    fn rejects_invalid_json() {
        let error = decode_text("{not json").unwrap_err();
        assert!(format!("{error:#}").contains("not valid JSON"));
    }

    #[test]
    fn reads_file_argument() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.json");
        std::fs::write(&path, r#"{"stringValue": "x"}"#).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(decode_text(&text).unwrap(), json!("x"));
    }
}
