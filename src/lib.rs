//! # serde_xini
//!
//! A reader and writer for an extended INI dialect, with Serde support.
//!
//! ## What does it add to INI?
//!
//! Plain INI stores strings under `key = value` lines grouped into sections.
//! This dialect keeps that and adds:
//!
//! - **Typed scalars**: `23`, `34.5` and `true` parse as numbers and booleans
//! - **Inline lists**: `tags = [ab, 23, 34.5]`
//! - **Multi-line strings**: values between `'''` or `"""` lines
//! - **Bracketed keys**: `list[] = x` and `map[key] = x` build lists and maps
//! - **Interceptors**: caller-supplied transforms applied to every parsed value
//!
//! See [`format`] for the full syntax.
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_xini = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Decoding and Encoding Documents
//!
//! ```rust
//! use serde_xini::{decode, encode, Value};
//!
//! let ini = "
//! ; demo configuration
//! name = demo
//! tags = [ab, 23, 34.5]
//!
//! [server]
//! host = localhost
//! port = 8080
//! ";
//!
//! let doc = decode(ini).unwrap();
//! assert_eq!(doc.get("name"), Some(&Value::from("demo")));
//! assert_eq!(
//!     doc.section("server").and_then(|s| s.get("port")),
//!     Some(&Value::Integer(8080))
//! );
//!
//! let text = encode(&doc).unwrap();
//! assert_eq!(
//!     text,
//!     "name = demo\ntags = [ab, 23, 34.5]\n\n[server]\nhost = localhost\nport = 8080\n"
//! );
//! assert_eq!(decode(&text).unwrap(), doc);
//! ```
//!
//! ### Working with Rust Types
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_xini::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Database {
//!     host: String,
//!     port: u16,
//! }
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Config {
//!     name: String,
//!     debug: bool,
//!     database: Database,
//! }
//!
//! let config = Config {
//!     name: "demo".to_string(),
//!     debug: false,
//!     database: Database { host: "localhost".to_string(), port: 5432 },
//! };
//!
//! let ini = to_string(&config).unwrap();
//! assert_eq!(
//!     ini,
//!     "name = demo\ndebug = false\n\n[database]\nhost = localhost\nport = 5432\n"
//! );
//!
//! let back: Config = from_str(&ini).unwrap();
//! assert_eq!(back, config);
//! ```
//!
//! ### Interceptors
//!
//! ```rust
//! use serde_xini::{Parser, Value};
//!
//! let mut parser = Parser::new();
//! parser.add_interceptor(|value, multiline| {
//!     Ok(match value {
//!         Value::String(s) if multiline => Value::String(s.trim_end().to_string()),
//!         other => other,
//!     })
//! });
//!
//! let doc = parser.parse("text = '''\nkeep   \n'''").unwrap();
//! assert_eq!(doc.get("text"), Some(&Value::from("keep")));
//! ```
//!
//! ### Dynamic Values with the ini! Macro
//!
//! ```rust
//! use serde_xini::{ini, Value};
//!
//! let data = ini!({
//!     "name": "Alice",
//!     "tags": ["rust", "serde", "ini"]
//! });
//!
//! if let Value::Map(map) = data {
//!     assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`trace` for skipped lines, `debug` for
//! dropped blocks and best-effort encodes) and never installs a subscriber.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Malformed input never panics; unreadable lines are skipped
//! - Proper error propagation with `Result` types
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Struct round trip with a nested section
//! - **`macro.rs`** - Building values with the ini! macro
//! - **`sections.rs`** - Bracketed keys, appends and list-of-map sections
//! - **`dynamic_values.rs`** - Working with `Value` dynamically
//! - **`interceptors.rs`** - Transforming values while parsing
//! - **`custom_options.rs`** - Parse and encode options
//!
//! Run any example with: `cargo run --example <name>`

pub mod coerce;
pub mod de;
pub mod document;
pub mod encoder;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod value;

pub use de::{from_value, ValueDeserializer};
pub use document::Document;
pub use encoder::Encoder;
pub use error::{Error, Result};
pub use map::IniMap;
pub use options::{EncodeOptions, ListSeparator, ParseOptions};
pub use parser::{Interceptor, Parser};
pub use ser::{to_value, ValueSerializer};
pub use value::Value;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Parses INI text into a [`Document`] with default options and no interceptors.
///
/// # Examples
///
/// ```rust
/// use serde_xini::{decode, Value};
///
/// let doc = decode("a[] = 1\na[] = 2").unwrap();
/// assert_eq!(doc.get("a"), Some(&Value::List(vec![Value::from(1), Value::from(2)])));
/// ```
///
/// # Errors
///
/// None in practice: without interceptors, parsing cannot fail.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(text: &str) -> Result<Document> {
    decode_with_options(text, ParseOptions::default())
}

/// Parses INI text into a [`Document`] with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_xini::{decode_with_options, ParseOptions, Value};
///
/// let options = ParseOptions::new().with_parse_bool(false);
/// let doc = decode_with_options("flag = true", options).unwrap();
/// assert_eq!(doc.get("flag"), Some(&Value::from("true")));
/// ```
///
/// # Errors
///
/// None in practice: without interceptors, parsing cannot fail.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_with_options(text: &str, options: ParseOptions) -> Result<Document> {
    Parser::with_options(options).parse(text)
}

/// Encodes a [`Document`] as INI text with default (lenient) options.
///
/// # Examples
///
/// ```rust
/// use serde_xini::{encode, Document, Value};
///
/// let mut doc = Document::new();
/// doc.insert("tags", Value::List(vec![Value::from("ab"), Value::from(23)]));
/// assert_eq!(encode(&doc).unwrap(), "tags = [ab, 23]\n");
/// ```
///
/// # Errors
///
/// None in lenient mode.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode(document: &Document) -> Result<String> {
    encode_with_options(document, EncodeOptions::default())
}

/// Encodes a [`Document`] as INI text with custom options.
///
/// # Errors
///
/// In strict mode, [`Error::UnsupportedValue`] for values without a text form.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_options(document: &Document, options: EncodeOptions) -> Result<String> {
    Encoder::new(options).encode(document)
}

/// Encodes a [`Value::Map`] as INI text, treating it as a document.
///
/// # Errors
///
/// [`Error::UnsupportedType`] if `value` is not a map.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_value(value: &Value) -> Result<String> {
    Encoder::default().encode_value(value)
}

/// Serialize any `T: Serialize` to an INI string.
///
/// `T` must serialize to a map, such as a struct or a `HashMap`. Nested
/// structs become sections.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_xini::to_string;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let ini = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(ini, "x = 1\ny = 2\n");
/// ```
///
/// # Errors
///
/// [`Error::UnsupportedType`] if `T` does not serialize to a map.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncodeOptions::default())
}

/// Serialize any `T: Serialize` to an INI string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_xini::{to_string_with_options, EncodeOptions, ListSeparator};
///
/// #[derive(Serialize)]
/// struct Tags { tags: Vec<&'static str> }
///
/// let options = EncodeOptions::new().with_list_separator(ListSeparator::Comma);
/// let ini = to_string_with_options(&Tags { tags: vec!["a", "b"] }, options).unwrap();
/// assert_eq!(ini, "tags = [a,b]\n");
/// ```
///
/// # Errors
///
/// [`Error::UnsupportedType`] if `T` does not serialize to a map, plus the
/// strict-mode errors of [`Encoder::encode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Encoder::new(options).encode_value(&value)
}

/// Serialize any `T: Serialize` to a writer as INI text.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_xini::to_writer;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(buffer, b"x = 1\ny = 2\n");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let ini = to_string(value)?;
    writer
        .write_all(ini.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from a string of INI text.
///
/// The text is parsed into a [`Document`] first, then `T` is read from it as
/// a map.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_xini::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x = 1\ny = 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the document cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let document = decode(s)?;
    from_value(Value::from(document))
}

/// Deserialize an instance of type `T` from an I/O stream of INI text.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_xini::from_reader;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x = 1\ny = 2")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails or the data cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of INI text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or the data cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: 2 };
        let ini = to_string(&point).unwrap();
        let point_back: Point = from_str(&ini).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let ini = to_string(&user).unwrap();
        assert_eq!(ini, "id = 123\nname = Alice\nactive = true\ntags = [admin, user]\n");
        let user_back: User = from_str(&ini).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_to_string_requires_a_map() {
        assert!(matches!(
            to_string(&vec![1, 2, 3]),
            Err(Error::UnsupportedType(_))
        ));
        assert!(matches!(to_string(&5), Err(Error::UnsupportedType(_))));
    }

    #[test]
    fn test_sections_from_nested_maps() {
        let mut sections = HashMap::new();
        let mut server = HashMap::new();
        server.insert("port".to_string(), 8080);
        sections.insert("server".to_string(), server);

        let ini = to_string(&sections).unwrap();
        assert_eq!(ini, "[server]\nport = 8080\n");

        let back: HashMap<String, HashMap<String, i32>> = from_str(&ini).unwrap();
        assert_eq!(back, sections);
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        let result: Result<Point> = from_slice(&[0xff, 0xfe]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("   \n  ").unwrap().is_empty());
        assert_eq!(encode(&Document::new()).unwrap(), "");
    }
}
