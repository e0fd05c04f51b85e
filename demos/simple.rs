//! Basic INI serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_xini::{from_str, to_string};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Server {
    host: String,
    port: u16,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Config {
    name: String,
    debug: bool,
    tags: Vec<String>,
    server: Server,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "inventory".to_string(),
        debug: false,
        tags: vec!["prod".to_string(), "eu-west".to_string()],
        server: Server {
            host: "localhost".to_string(),
            port: 8080,
        },
    };

    // Nested structs become sections
    let ini = to_string(&config)?;
    println!("INI output:\n{}", ini);

    let config_back: Config = from_str(&ini)?;
    assert_eq!(config, config_back);
    println!("✓ Round-trip successful");

    Ok(())
}
