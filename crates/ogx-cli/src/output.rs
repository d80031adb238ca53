use ogx_client::ApiCallLog;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// One block per logged call: a status line, then the curl command.
pub fn render_calls(calls: &ApiCallLog) -> String {
    calls
        .snapshot()
        .iter()
        .map(|call| {
            let outcome = match (call.status, &call.error) {
                (Some(status), _) => status.to_string(),
                (None, Some(error)) => format!("failed: {error}"),
                (None, None) => "pending".to_string(),
            };
            let duration = call
                .duration_ms
                .map_or_else(String::new, |ms| format!(" ({ms} ms)"));
            format!(
                "# {} {} {} -> {outcome}{duration}\n{}",
                call.id, call.method, call.url, call.curl
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn print_calls(calls: &ApiCallLog) {
    if calls.is_empty() {
        return;
    }
    eprintln!("{}", render_calls(calls));
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn raw_is_single_line() {
        let value = json!({"a": [1, 2], "b": {"c": true}});
        let raw = render(&value, OutputFormat::Raw).unwrap();
        assert_eq!(raw, r#"{"a":[1,2],"b":{"c":true}}"#);
        let pretty = render(&value, OutputFormat::Json).unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn calls_render_outcome_and_curl() {
        let log = ApiCallLog::with_capacity(10);
        let ok = log.record(
            "GET",
            "http://h/E1/metadata",
            "curl -X GET 'http://h/E1/metadata'".to_string(),
        );
        log.complete(&ok, 200, 12);
        let failed = log.record(
            "POST",
            "http://h/search",
            "curl -X POST 'http://h/search'".to_string(),
        );
        log.fail(&failed, "connection refused".to_string(), 3);

        let rendered = render_calls(&log);
        assert!(rendered.contains("GET http://h/E1/metadata -> 200 (12 ms)"));
        assert!(rendered.contains("curl -X GET 'http://h/E1/metadata'"));
        assert!(rendered.contains("-> failed: connection refused (3 ms)"));
    }
}
