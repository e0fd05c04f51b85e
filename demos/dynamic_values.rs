//! Working with Value and Document for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use serde_xini::{encode, from_value, ini, to_value, Document, Value};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Build a document by hand
    let mut doc = Document::new();
    doc.insert("host", "localhost");
    doc.insert("port", 8080);
    doc.insert("features", ini!(["auth", "logging", "metrics"]));
    doc.insert("debug", true);

    println!("Document as INI:\n{}", encode(&doc)?);

    // Access values dynamically
    if let Some(Value::String(host)) = doc.get("host") {
        println!("Accessing field 'host': {}", host);
    }

    if let Some(port) = doc.get("port").and_then(Value::as_i64) {
        println!("Accessing field 'port': {}", port);
    }

    if let Some(features) = doc.get("features").and_then(Value::as_list) {
        println!("Accessing field 'features': {} items\n", features.len());
    }

    // Append to a list in place
    if let Some(features) = doc.get_mut("features") {
        features.push(Value::from("tracing"));
    }

    // Convert an existing struct to Value and store it as a section
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;
    println!("Type checks:");
    println!("  is_map:    {}", user_value.is_map());
    println!("  is_list:   {}", user_value.is_list());
    println!("  is_string: {}\n", user_value.is_string());

    doc.insert("user", user_value);
    println!("With a user section:\n{}", encode(&doc)?);

    let user_back: User = from_value(doc.get("user").cloned().unwrap_or_default())?;
    println!("Read back: {:?}", user_back);

    Ok(())
}
