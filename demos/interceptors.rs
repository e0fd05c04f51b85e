//! Transforming values while parsing with interceptors.
//!
//! Run with: cargo run --example interceptors

use serde_xini::{Error, Parser, Value};
use std::collections::HashMap;
use std::error::Error as StdError;

const SOURCE: &str = "
home = ${HOME}
greeting = hello
banner = '''
  welcome
  to the demo
'''
secret = !forbidden
";

fn main() -> Result<(), Box<dyn StdError>> {
    let vars: HashMap<&str, &str> = [("HOME", "/home/demo")].into_iter().collect();

    let mut parser = Parser::new();

    // Expand ${NAME} placeholders
    parser.add_interceptor(move |value, _| {
        Ok(match value {
            Value::String(s) if s.starts_with("${") && s.ends_with('}') => {
                let name = &s[2..s.len() - 1];
                Value::from(vars.get(name).copied().unwrap_or_default())
            }
            other => other,
        })
    });

    // Strip indentation from multi-line blocks only
    parser.add_interceptor(|value, multiline| {
        Ok(match value {
            Value::String(s) if multiline => {
                let lines: Vec<&str> = s.lines().map(str::trim).collect();
                Value::String(lines.join("\n"))
            }
            other => other,
        })
    });

    let doc = parser.parse(&SOURCE.replace("secret = !forbidden\n", ""))?;
    for (key, value) in doc.iter() {
        println!("{} = {:?}", key, value);
    }

    // An interceptor can reject a value and abort the parse
    parser.add_interceptor(|value, _| match value.as_str() {
        Some(s) if s.starts_with('!') => Err(Error::custom(format!("rejected value {}", s))),
        _ => Ok(value),
    });

    match parser.parse(SOURCE) {
        Ok(_) => println!("\nunexpected success"),
        Err(err) => println!("\nParse aborted: {}", err),
    }

    Ok(())
}
