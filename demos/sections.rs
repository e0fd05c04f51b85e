//! Reading an extended INI document: sections, lists, nested keys and multi-line values.
//!
//! Run with: cargo run --example sections

use serde_xini::{decode, encode, Value};
use std::error::Error;

const SOURCE: &str = "
; default section
int = 23
float = 34.5
str = ab cd
bool = true
multi-line = '''
this is
  a multi
 line string
'''
inlineList = [ab, 23, 34.5]
simpleList[] = 567
simpleList[] = \"some value\"

[simpleMap]
val_one = 567
val_two = 'some value'

[simpleMap2]
[val_one] = 567
[val_two] = \"some value\"

[array]
arr_sub_key[] = arr_elem_one
arr_sub_key[] = arr_elem_two

[array_keys]
val_arr_two[6] = key_6
val_arr_two[some_key] = some_key_value
";

fn main() -> Result<(), Box<dyn Error>> {
    let doc = decode(SOURCE)?;

    println!("Default section:");
    for (key, value) in &doc.default_section() {
        println!("  {} ({}) = {}", key, value.kind(), value);
    }

    println!("\nSections:");
    for (name, section) in doc.sections() {
        println!("  [{}] {}", name, section);
    }

    if let Some(Value::Map(keys)) = doc.section("array_keys").and_then(|s| s.get("val_arr_two")) {
        println!("\nval_arr_two keys: {:?}", keys.keys().collect::<Vec<_>>());
    }

    println!("\nRe-encoded:\n{}", encode(&doc)?);

    Ok(())
}
