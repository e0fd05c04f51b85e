//! Customizing parsing and output with ParseOptions and EncodeOptions.
//!
//! Run with: cargo run --example custom_options

use serde::{Deserialize, Serialize};
use serde_xini::{
    decode_with_options, ini, to_string_with_options, EncodeOptions, Encoder, ListSeparator,
    ParseOptions,
};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Config {
    name: String,
    version: String,
    debug: bool,
    ports: Vec<u16>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        version: "1.0.0".to_string(),
        debug: true,
        ports: vec![80, 443],
    };

    // Default list separator
    println!("Default (comma and space):");
    println!("{}", serde_xini::to_string(&config)?);

    // Compact lists
    println!("Comma only:");
    let compact = EncodeOptions::new().with_list_separator(ListSeparator::Comma);
    println!("{}", to_string_with_options(&config, compact)?);

    // Keep true / false as strings
    let text = "debug = true\nlevel = 3";
    let doc = decode_with_options(text, ParseOptions::new().with_parse_bool(false))?;
    println!("Without boolean inference: debug = {:?}\n", doc.get("debug"));

    // Multi-line blocks keep their carriage returns when normalization is off
    let crlf = "text = '''\r\nline\r\n'''\r\n";
    let raw = decode_with_options(crlf, ParseOptions::new().with_normalize_newlines(false))?;
    println!("Without newline normalization: text = {:?}\n", raw.get("text"));

    // Strict mode refuses values that would not read back unchanged
    let nested = ini!({"section": {"key": {"too": {"deep": 1}}}});
    let lenient = Encoder::default().encode_value(&nested)?;
    println!("Lenient output:\n{}", lenient);
    match Encoder::new(EncodeOptions::strict()).encode_value(&nested) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("Strict mode: {}", err),
    }

    Ok(())
}
