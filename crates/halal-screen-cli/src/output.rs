use halal_screen_core::Envelope;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => print!("{}", render_table(envelope)?),
    }

    Ok(())
}

fn render_table(envelope: &Envelope<Value>) -> Result<String, CliError> {
    let mut out = String::new();
    let meta = &envelope.meta;

    out.push_str(&format!("request_id  : {}\n", meta.request_id));
    out.push_str(&format!("generated_at: {}\n", meta.generated_at));
    out.push_str(&format!("source      : {}\n", meta.source));

    if let Some(verdict) = envelope.data.get("compliance") {
        out.push_str(&render_verdict(&envelope.data, verdict));
    } else {
        out.push_str("data:\n");
        for line in serde_json::to_string_pretty(&envelope.data)?.lines() {
            out.push_str(&format!("  {line}\n"));
        }
    }

    if !meta.warnings.is_empty() {
        out.push_str("warnings:\n");
        for warning in &meta.warnings {
            out.push_str(&format!("  - {warning}\n"));
        }
    }

    if !envelope.errors.is_empty() {
        out.push_str("errors:\n");
        for error in &envelope.errors {
            out.push_str(&format!("  - {}: {}\n", error.code, error.message));
        }
    }

    Ok(out)
}

fn render_verdict(data: &Value, verdict: &Value) -> String {
    let mut out = String::new();
    let symbol = data.get("symbol").and_then(Value::as_str).unwrap_or("-");
    out.push_str(&format!("symbol      : {symbol}\n"));

    if verdict.is_null() {
        out.push_str("verdict     : INDETERMINATE\n");
        return out;
    }

    let status = if verdict["is_fully_compliant"].as_bool() == Some(true) {
        "COMPLIANT"
    } else {
        "NOT COMPLIANT"
    };
    out.push_str(&format!("verdict     : {status}\n"));

    for (label, ratio, flag) in [
        ("debt", "debt_ratio", "is_debt_compliant"),
        ("liquidity", "liquidity_ratio", "is_liquidity_compliant"),
        ("receivables", "receivables_ratio", "is_receivables_compliant"),
    ] {
        let value = verdict[ratio]
            .as_f64()
            .map_or_else(|| String::from("n/a"), |value| format!("{value:.2}%"));
        let mark = if verdict[flag].as_bool() == Some(true) { "ok" } else { "FAIL" };
        out.push_str(&format!("{label:<12}: {value:>10}  {mark}\n"));
    }

    if let Some(reasons) = verdict["non_compliant_reasons"].as_array() {
        if !reasons.is_empty() {
            out.push_str("reasons:\n");
            for reason in reasons.iter().filter_map(Value::as_str) {
                out.push_str(&format!("  - {reason}\n"));
            }
        }
    }

    out
}
