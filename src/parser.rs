//! INI decoding.
//!
//! The [`Parser`] turns text into a [`Document`]. It is a liberal reader:
//! lines it cannot make sense of are skipped, never reported.
//!
//! ## Overview
//!
//! - **Comments**: lines starting with `#`, `;` or `//`
//! - **Sections**: `[name]` headers, at least two characters between the brackets
//! - **Typed scalars**: integers, floats and booleans are inferred, quoted values stay strings
//! - **Inline lists**: `tags = [ab, 23, 34.5]`
//! - **Multi-line strings**: opened and closed by a line holding only `'''` or `"""`
//! - **Nested keys**: `list[] = x`, `map[key] = x`, and `[] = x` / `- = x` inside a section
//! - **Interceptors**: caller-supplied transforms applied to every collected value
//!
//! ## Usage
//!
//! ```rust
//! use serde_xini::{Parser, Value};
//!
//! let ini = "
//! name = demo
//! tags = [ab, 23]
//!
//! [server]
//! port = 8080
//! ";
//!
//! let doc = Parser::new().parse(ini).unwrap();
//! assert_eq!(doc.get("name"), Some(&Value::from("demo")));
//! assert_eq!(
//!     doc.section("server").and_then(|s| s.get("port")),
//!     Some(&Value::Integer(8080))
//! );
//! ```

use crate::document::is_section;
use crate::{coerce, Document, Error, IniMap, ParseOptions, Result, Value};
use std::fmt;
use tracing::{debug, trace};

/// A value transform run on every collected value.
///
/// Receives the value and whether it closes a multi-line block. Returning an
/// error aborts the parse with [`Error::Interceptor`].
pub type Interceptor = dyn Fn(Value, bool) -> Result<Value> + Send + Sync;

/// The INI parser.
///
/// A parser holds its [`ParseOptions`] and an ordered list of interceptors.
/// Nothing else survives between calls to [`parse`](Parser::parse), so one
/// parser can be reused for any number of inputs.
pub struct Parser {
    options: ParseOptions,
    interceptors: Vec<Box<Interceptor>>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("options", &self.options)
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

impl Parser {
    /// Creates a parser with default options and no interceptors.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Creates a parser with custom options and no interceptors.
    pub fn with_options(options: ParseOptions) -> Self {
        Parser {
            options,
            interceptors: Vec::new(),
        }
    }

    /// Returns the options this parser was built with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Replaces the reserved flags word of this parser's options.
    pub fn set_flags(&mut self, flags: u32) -> &mut Self {
        self.options.flags = flags;
        self
    }

    /// Appends an interceptor to the end of the chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_xini::{Parser, Value};
    ///
    /// let mut parser = Parser::new();
    /// parser.add_interceptor(|value, _| {
    ///     Ok(match value {
    ///         Value::String(s) => Value::String(s.to_uppercase()),
    ///         other => other,
    ///     })
    /// });
    ///
    /// let doc = parser.parse("key = value").unwrap();
    /// assert_eq!(doc.get("key"), Some(&Value::from("VALUE")));
    /// ```
    pub fn add_interceptor<F>(&mut self, interceptor: F) -> &mut Self
    where
        F: Fn(Value, bool) -> Result<Value> + Send + Sync + 'static,
    {
        self.interceptors.push(Box::new(interceptor));
        self
    }

    /// Replaces the whole interceptor chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_xini::{Interceptor, Parser, Value};
    ///
    /// let chain: Vec<Box<Interceptor>> = vec![
    ///     Box::new(|value, _| Ok(value)),
    ///     Box::new(|value, multiline| {
    ///         Ok(if multiline { Value::from("<block>") } else { value })
    ///     }),
    /// ];
    ///
    /// let mut parser = Parser::new();
    /// parser.set_interceptors(chain);
    /// assert_eq!(parser.interceptor_count(), 2);
    /// ```
    pub fn set_interceptors<I>(&mut self, interceptors: I) -> &mut Self
    where
        I: IntoIterator<Item = Box<Interceptor>>,
    {
        self.interceptors = interceptors.into_iter().collect();
        self
    }

    /// Removes every interceptor.
    pub fn clear_interceptors(&mut self) -> &mut Self {
        self.interceptors.clear();
        self
    }

    /// Returns the number of registered interceptors.
    pub fn interceptor_count(&self) -> usize {
        self.interceptors.len()
    }

    /// Parses `text` into a [`Document`].
    ///
    /// # Errors
    ///
    /// Malformed input never fails. The only error is [`Error::Interceptor`],
    /// returned when a registered interceptor rejects a value.
    pub fn parse(&self, text: &str) -> Result<Document> {
        let normalized;
        let text = if self.options.normalize_newlines && text.contains('\r') {
            normalized = text.replace("\r\n", "\n");
            normalized.as_str()
        } else {
            text
        };

        let source = text.trim();
        if source.is_empty() {
            return Ok(Document::new());
        }

        let mut scan = Scan::new(self);
        for (index, line) in source.split('\n').enumerate() {
            scan.line(index + 1, line)?;
        }
        Ok(scan.finish())
    }

    fn intercept(&self, key: &str, mut value: Value, multiline: bool) -> Result<Value> {
        for (index, interceptor) in self.interceptors.iter().enumerate() {
            value = interceptor(value, multiline)
                .map_err(|err| Error::interceptor(index, key, err))?;
        }
        Ok(value)
    }
}

/// Per-call scan state. Dropped when the parse returns.
struct Scan<'p, 's> {
    parser: &'p Parser,
    data: IniMap,
    section: String,
    multiline_key: Option<&'s str>,
    multiline_lines: Vec<&'s str>,
}

impl<'p, 's> Scan<'p, 's> {
    fn new(parser: &'p Parser) -> Self {
        Scan {
            parser,
            data: IniMap::new(),
            section: String::new(),
            multiline_key: None,
            multiline_lines: Vec::new(),
        }
    }

    fn line(&mut self, number: usize, raw: &'s str) -> Result<()> {
        if let Some(key) = self.multiline_key {
            let trimmed = raw.trim();
            if coerce::is_block_sentinel(trimmed) {
                let value = Value::String(self.multiline_lines.join("\n"));
                self.multiline_lines.clear();
                // The interceptors see `multiline = true` for this value only.
                let result = self.collect(key, value, true);
                self.multiline_key = None;
                return result;
            }
            self.multiline_lines.push(raw);
            return Ok(());
        }

        let line = raw.trim();
        if line.is_empty() {
            return Ok(());
        }

        if line.starts_with('#') || line.starts_with(';') || line.starts_with("//") {
            return Ok(());
        }

        // `[X]` is three bytes and is not a header.
        if line.len() > 3 && line.starts_with('[') && line.ends_with(']') {
            self.section = line[1..line.len() - 1].to_string();
            return Ok(());
        }

        let eq = match line.find('=') {
            Some(pos) if pos > 0 => pos,
            _ => {
                trace!(line = number, content = line, "skipping line without key/value");
                return Ok(());
            }
        };

        let key = line[..eq].trim_end();
        let raw_value = line[eq + 1..].trim_start();

        if raw_value.is_empty() {
            return self.collect(key, Value::default(), false);
        }

        if coerce::is_block_sentinel(raw_value) {
            self.multiline_key = Some(key);
            return Ok(());
        }

        let parse_bool = self.parser.options.parse_bool;
        let value = if raw_value.starts_with('[') && raw_value.ends_with(']') {
            let interior = &raw_value[1..raw_value.len() - 1];
            Value::List(coerce::to_typed_list(interior, parse_bool))
        } else if let Some(content) = coerce::unquote(raw_value) {
            Value::String(content.to_string())
        } else {
            coerce::to_typed_with(raw_value, parse_bool)
        };

        self.collect(key, value, false)
    }

    fn collect(&mut self, key: &str, value: Value, multiline: bool) -> Result<()> {
        let value = self.parser.intercept(key, value, multiline)?;

        if self.section.is_empty() {
            // A bare `[]` is too short to name a list and is kept as a plain key.
            if key.len() > 2 && key.ends_with("[]") {
                let name = &key[..key.len() - 2];
                let list = self.data.get_or_insert_with(name, || Value::List(Vec::new()));
                if list.is_scalar() {
                    *list = Value::List(Vec::new());
                }
                list.push(value);
            } else {
                self.data.insert(key.to_string(), value);
            }
            return Ok(());
        }

        if key == "-" || key == "[]" {
            let section = self.section_entry(|| Value::List(Vec::new()));
            section.push(value);
            return Ok(());
        }

        match split_key(key) {
            Some(("", sub_key)) => {
                let mut element = IniMap::with_capacity(1);
                element.insert(sub_key.to_string(), value);
                let section = self.section_entry(|| Value::List(Vec::new()));
                section.push(Value::Map(element));
            }
            Some((name, sub_key)) => {
                let section = ensure_map(self.section_entry(|| Value::Map(IniMap::new())));
                let slot = section.get_or_insert_with(name, || Value::List(Vec::new()));
                if slot.is_scalar() {
                    *slot = Value::List(Vec::new());
                }
                if sub_key.is_empty() {
                    slot.push(value);
                } else {
                    slot.set(sub_key, value);
                }
            }
            None => {
                self.section_entry(|| Value::Map(IniMap::new()))
                    .set(key, value);
            }
        }

        Ok(())
    }

    /// The current section's container, created with `init` on first use.
    ///
    /// A top-level scalar sharing the section's name is replaced.
    fn section_entry<F>(&mut self, init: F) -> &mut Value
    where
        F: Fn() -> Value,
    {
        let entry = self.data.get_or_insert_with(&self.section, &init);
        if entry.is_scalar() {
            *entry = init();
        }
        entry
    }

    fn finish(self) -> Document {
        if let Some(key) = self.multiline_key {
            debug!(
                key,
                lines = self.multiline_lines.len(),
                "dropping unterminated multi-line value"
            );
        }
        let sections = self.data.values().filter(|v| is_section(v)).count();
        debug!(
            sections,
            keys = self.data.len() - sections,
            "parsed ini document"
        );
        Document::from(self.data)
    }
}

/// Splits `name[sub_key]` at the first `[`. Returns `None` unless the key ends with `]`.
///
/// Either part may be empty: `list[]` gives `("list", "")`, `[key]` gives `("", "key")`.
fn split_key(key: &str) -> Option<(&str, &str)> {
    let open = key.find('[')?;
    let inner = key.strip_suffix(']')?;
    Some((&key[..open], &inner[open + 1..]))
}

/// Turns `value` into a map in place (lists are keyed by position) and returns it.
fn ensure_map(value: &mut Value) -> &mut IniMap {
    if !value.is_map() {
        let map = match std::mem::take(value) {
            Value::List(items) => IniMap::from(items),
            _ => IniMap::new(),
        };
        *value = Value::Map(map);
    }
    match value {
        Value::Map(map) => map,
        _ => unreachable!("value was just replaced by a map"),
    }
}
