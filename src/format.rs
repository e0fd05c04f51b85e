//! The extended INI format
//!
//! This module documents the dialect read by [`Parser`](crate::Parser) and
//! written by [`Encoder`](crate::Encoder).
//!
//! # Overview
//!
//! Plain INI has sections and `key = value` lines with string values. This
//! dialect keeps that surface and adds typed scalars, inline lists,
//! multi-line strings and bracketed keys that build lists and maps.
//!
//! ## Design Philosophy
//!
//! - **Liberal reading**: anything that is not understood is skipped, never an error
//! - **Typed values**: numbers and booleans are inferred; quotes keep text as text
//! - **Round trips**: encoded output parses back to the same values
//!
//! # Core Syntax
//!
//! ## Lines
//!
//! The whole input is trimmed, then split on `\n` (`\r\n` is normalized first).
//! Each line is trimmed and then classified:
//!
//! | Line | Meaning |
//! |------|---------|
//! | empty | ignored |
//! | starts with `#`, `;` or `//` | comment, ignored |
//! | `[name]`, more than three characters long | section header |
//! | contains `=` after the first character | `key = value` |
//! | anything else | ignored |
//!
//! The key is everything before the first `=`, right-trimmed; the value is
//! everything after it, left-trimmed. `[X]` (a one-character name) is not a
//! header and, having no `=`, is dropped.
//!
//! ## Scalars
//!
//! | Raw value | Result |
//! |-----------|--------|
//! | (nothing) | empty string |
//! | `23`, `-7` | integer |
//! | `34.5`, `1e3` | float |
//! | `true`, `FALSE` | boolean (case-insensitive) |
//! | `"23"`, `'true'` | string, outer quotes removed verbatim |
//! | `ab cd` | string |
//!
//! `inf` and `NaN` stay strings. There are no escape sequences: only the
//! outermost matching pair of quotes is removed.
//!
//! ## Inline Lists
//!
//! A value wrapped in `[` and `]` is split on commas into typed items:
//!
//! ```text
//! tags = [ab, 23, 34.5, "x, y"]
//! ```
//!
//! Empty items are dropped. A quoted item may contain commas if its closing
//! quote is followed by a comma or the end of the list.
//!
//! ## Multi-line Strings
//!
//! A value of exactly `'''` or `"""` opens a block. Following lines are taken
//! verbatim until a line whose trimmed content is `'''` or `"""`:
//!
//! ```text
//! description = '''
//! line one
//!   line two
//! '''
//! ```
//!
//! Lines are joined with `\n`. A block still open at the end of input is
//! dropped.
//!
//! ## Bracketed Keys
//!
//! In the default section (before any header), `name[] = value` appends to
//! the list `name`:
//!
//! ```text
//! a[] = 1
//! a[] = 2
//! ```
//!
//! gives `a = [1, 2]`. Inside a section:
//!
//! | Line | Effect on section `s` |
//! |------|-----------------------|
//! | `[] = 1` or `- = 1` | appends `1` to `s` itself |
//! | `arr[] = x` | appends `x` to `s.arr` |
//! | `arr[k1] = v1` | sets `s.arr.k1` |
//! | `[sub] = v` | appends the one-entry map `{sub = v}` to `s` |
//!
//! There are no trailing comments: `a = 1 ; note` has the value `1 ; note`.
//!
//! Appending to a map uses the next free integer key, so appends are never lost.
//! A list that receives a non-integer key becomes a map keyed by position.
//!
//! # Encoding
//!
//! Output is the default section without a header, a blank line, then the
//! named sections in order, separated by blank lines:
//!
//! ```text
//! name = demo
//! tags = [ab, 23]
//!
//! [server]
//! host = localhost
//! limits[cpu] = 2
//!
//! [servers]
//! [host] = alpha
//! [host] = beta
//! ```
//!
//! Strings are quoted only when they would otherwise read back as something
//! else. Floats keep a fraction or exponent (`3.0`) so they stay floats.
//!
//! ## Shapes Without a Text Form
//!
//! A map nested inside a map entry, a list or map inside a list item, and
//! non-finite floats cannot be written faithfully. Neither can a few strings:
//!
//! - a multi-line string with a line that trims to `'''` or `"""`, since that
//!   line would close the block; the encoder drops such lines
//! - a multi-line string with `\r` before a line break, since `\r\n` is
//!   normalized to `\n` on read; the encoder writes it verbatim
//! - a list item in which both `"` and `'` are followed by a comma, since
//!   either quote would end the item early; the encoder wraps it in `"`
//!
//! By default the encoder writes the best text it can, as above or as the
//! value's display text, and logs the fact at `debug` level; with
//! [`EncodeOptions::strict`](crate::EncodeOptions::strict) it returns
//! [`Error::UnsupportedValue`](crate::Error::UnsupportedValue) instead.
