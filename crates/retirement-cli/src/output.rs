use serde_json::Value;
use std::io;
use tabled::{builder::Builder, Table};

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => print_table(value),
        OutputFormat::Csv => print_csv(value),
        OutputFormat::Minimal => print_minimal(value),
    }
}

/// Pretty-print JSON to stdout.
fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// Field/value table of the result record, with warnings and methodology
/// appended when present.
fn print_table(value: &Value) {
    let envelope = match value.as_object() {
        Some(map) => map,
        None => {
            println!("{}", value);
            return;
        }
    };
    let result = envelope.get("result").unwrap_or(value);

    if let Value::Object(fields) = result {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in fields {
            builder.push_record([key.as_str(), &scalar(val)]);
        }
        println!("{}", Table::from(builder));
    } else {
        println!("{}", result);
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for warning in warnings {
                if let Value::String(s) = warning {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

/// Two-column CSV of the result record.
fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|map| map.get("result"))
        .unwrap_or(value);

    let _ = wtr.write_record(["field", "value"]);
    if let Value::Object(fields) = result {
        for (key, val) in fields {
            let _ = wtr.write_record([key.as_str(), &scalar(val)]);
        }
    }
    let _ = wtr.flush();
}

/// Print just the headline figure.
fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|map| map.get("result"))
        .unwrap_or(value);

    // Headline order for the shortfall record
    let priority_keys = [
        "Shortfall",
        "Required Monthly Contributions",
        "Required Savings",
        "Future Value",
    ];

    if let Value::Object(fields) = result {
        for key in &priority_keys {
            if let Some(val) = fields.get(*key) {
                if !val.is_null() {
                    println!("{}", scalar(val));
                    return;
                }
            }
        }

        // Fall back to the first field
        if let Some((key, val)) = fields.iter().next() {
            println!("{}: {}", key, scalar(val));
            return;
        }
    }

    println!("{}", scalar(result));
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
