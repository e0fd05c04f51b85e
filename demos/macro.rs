//! Building values with the ini! macro.
//!
//! Run with: cargo run --example macro

use serde_xini::{encode_value, ini, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Scalars
    let port = ini!(8080);
    let ratio = ini!(0.75);
    let enabled = ini!(true);
    let name = ini!("inventory");
    println!("Scalars: {} {} {} {}\n", port, ratio, enabled, name);

    // Inline lists mix types freely
    let tags = ini!(["prod", 3, 2.5, false]);
    println!("List kind: {}, {} items\n", tags.kind(), tags.as_list().map_or(0, Vec::len));

    // Expressions are converted through serde
    let workers: Vec<u32> = vec![1, 2, 4];
    let pool = ini!(workers);
    assert!(pool.is_list());

    // A map whose values are maps encodes as a document with sections
    let document = ini!({
        "name": "inventory",
        "tags": ["prod", "eu-west"],
        "server": {
            "host": "0.0.0.0",
            "port": 8080
        },
        "database": {
            "url": "postgres://db.internal/inventory",
            "pool": 32
        }
    });

    println!("Document:\n{}", encode_value(&document)?);

    if let Some(Value::Map(server)) = document.get("server") {
        println!("server has {} keys", server.len());
    }

    Ok(())
}
