//! Configuration options for INI parsing and encoding.
//!
//! - [`ParseOptions`]: toggles for the [`Parser`](crate::Parser)
//! - [`EncodeOptions`]: toggles for the [`Encoder`](crate::Encoder)
//! - [`ListSeparator`]: separator written between inline list items
//!
//! Both option structs carry an opaque `flags` word. No bit is interpreted by
//! this version of the crate; it is kept so callers that pass integer flags
//! around have somewhere to put them.
//!
//! ## Examples
//!
//! ```rust
//! use serde_xini::{encode_with_options, decode, EncodeOptions, ListSeparator};
//!
//! let doc = decode("tags = [a, b]").unwrap();
//!
//! let options = EncodeOptions::new().with_list_separator(ListSeparator::Comma);
//! let ini = encode_with_options(&doc, options).unwrap();
//! assert_eq!(ini, "tags = [a,b]\n");
//! ```

/// Separator written between items of an inline list.
///
/// # Examples
///
/// ```rust
/// use serde_xini::ListSeparator;
///
/// assert_eq!(ListSeparator::CommaSpace.as_str(), ", ");
/// assert_eq!(ListSeparator::Comma.as_str(), ",");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ListSeparator {
    #[default]
    CommaSpace,
    Comma,
}

impl ListSeparator {
    /// Returns the string representation of this separator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ListSeparator::CommaSpace => ", ",
            ListSeparator::Comma => ",",
        }
    }
}

/// Options controlling how text is decoded.
///
/// # Examples
///
/// ```rust
/// use serde_xini::{ParseOptions, Parser, Value};
///
/// let parser = Parser::with_options(ParseOptions::new().with_parse_bool(false));
/// let doc = parser.parse("debug = true").unwrap();
/// assert_eq!(doc.get("debug"), Some(&Value::from("true")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub flags: u32,
    pub normalize_newlines: bool,
    pub parse_bool: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            flags: 0,
            normalize_newlines: true,
            parse_bool: true,
        }
    }
}

impl ParseOptions {
    /// Creates default options: `\r\n` normalized, booleans inferred.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reserved flags word.
    #[must_use]
    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    /// Controls whether `\r\n` line endings are rewritten to `\n` before scanning.
    ///
    /// When disabled, a trailing `\r` stays part of each line's raw text. Lines
    /// are still trimmed, so only multi-line blocks observe the difference.
    #[must_use]
    pub fn with_normalize_newlines(mut self, normalize: bool) -> Self {
        self.normalize_newlines = normalize;
        self
    }

    /// Controls whether `true` / `false` are inferred as booleans.
    #[must_use]
    pub fn with_parse_bool(mut self, parse_bool: bool) -> Self {
        self.parse_bool = parse_bool;
        self
    }

    #[must_use]
    pub const fn flags(&self) -> u32 {
        self.flags
    }
}

/// Options controlling how a [`Document`](crate::Document) is encoded.
///
/// # Examples
///
/// ```rust
/// use serde_xini::EncodeOptions;
///
/// let options = EncodeOptions::new();
/// assert!(!options.strict);
///
/// let strict = EncodeOptions::strict();
/// assert!(strict.strict);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    pub flags: u32,
    pub strict: bool,
    pub list_separator: ListSeparator,
}

impl EncodeOptions {
    /// Creates default options: lenient, `", "` between list items.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject values the format cannot express instead of
    /// stringifying them.
    #[must_use]
    pub fn strict() -> Self {
        EncodeOptions {
            strict: true,
            ..Default::default()
        }
    }

    /// Sets the reserved flags word.
    #[must_use]
    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the separator for inline lists.
    #[must_use]
    pub fn with_list_separator(mut self, separator: ListSeparator) -> Self {
        self.list_separator = separator;
        self
    }

    #[must_use]
    pub const fn flags(&self) -> u32 {
        self.flags
    }
}
