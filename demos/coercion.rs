//! Encoding non-text keys and values with coercion hooks.
//!
//! Run with: cargo run --example coercion

use serde::Serialize;
use serde_hstore::{coerce, to_string, to_string_with_options, Error, HstoreOptions, Value};
use std::collections::BTreeMap;

#[derive(Serialize)]
struct Reading {
    sensor: String,
    celsius: f64,
    samples: Vec<u32>,
    calibrated: Option<bool>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let reading = Reading {
        sensor: "greenhouse-2".to_string(),
        celsius: 21.5,
        samples: vec![3, 5, 8],
        calibrated: None,
    };

    // Without a hook, non-text values are rejected
    match to_string(&reading) {
        Err(err) => println!("without value_map: {}", err),
        Ok(hstore) => println!("unexpected success: {}", hstore),
    }

    let options = HstoreOptions::new().with_value_map(coerce::to_text);
    println!("to_text: {}", to_string_with_options(&reading, options)?);

    let options = HstoreOptions::new().with_value_map(|value: &Value| match value {
        Value::Array(items) => Ok(items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(";")),
        Value::Float(f) => Ok(format!("{:.2}", f)),
        other => Err(Error::custom(format!("no rule for {}", other.kind()))),
    });
    println!("custom: {}", to_string_with_options(&reading, options)?);

    let mut by_id = BTreeMap::new();
    by_id.insert(7, "seven");
    by_id.insert(11, "eleven");
    let options = HstoreOptions::new().with_key_map(|key: &Value| Ok(format!("id-{}", key)));
    println!("key_map: {}", to_string_with_options(&by_id, options)?);

    Ok(())
}
