//! The hstore text format
//!
//! This module documents the text form of PostgreSQL's `hstore` type as
//! written and read by this library.
//!
//! # Overview
//!
//! An hstore value is a flat set of key/value pairs. Keys are text; values
//! are text or `NULL`. There is no nesting and no other type.
//!
//! ```text
//! "name"=>"Alice","city"=>"Seoul","nickname"=>NULL
//! ```
//!
//! # Pairs
//!
//! Each pair is a quoted key, the `=>` arrow, and either a quoted value or
//! the bare word `NULL`:
//!
//! ```text
//! pair   = quoted ws "=>" ws ( quoted | "NULL" )
//! hstore = ws [ pair ws *( "," ws pair ws ) ]
//! quoted = DQUOTE *( char / "\" DQUOTE / "\\" ) DQUOTE
//! ws     = *( SP / HTAB / LF / CR / FF )
//! ```
//!
//! **Rules**:
//! - Pairs are separated by a single `,`. A trailing `,` is an error.
//! - Inside quotes, `"` and `\` are written as `\"` and `\\`. No other escape
//!   exists; a backslash before anything else is rejected.
//! - `NULL` is matched exactly, in upper case, outside quotes. `"NULL"` is
//!   the four-letter text `NULL`.
//! - Any other unquoted token is an error.
//! - Empty input is an empty hstore.
//!
//! # Writing
//!
//! Output is canonical and compact: no whitespace, every key and non-null
//! value quoted, pairs in source order, duplicates kept.
//!
//! | Source pair           | Output              |
//! |-----------------------|---------------------|
//! | `("a", Some("1"))`    | `"a"=>"1"`          |
//! | `("a", None)`         | `"a"=>NULL`         |
//! | `("a\"b", Some("c\\d"))` | `"a\"b"=>"c\\d"` |
//! | `("a", Some("NULL"))` | `"a"=>"NULL"`       |
//!
//! # Reading
//!
//! Whitespace is accepted around the whole input, around `,` and around
//! `=>`. Errors report the byte offset where the problem starts:
//!
//! | Input            | Error                               |
//! |------------------|-------------------------------------|
//! | `"a"=>`          | expected a value, offset 5          |
//! | `"a"=>"1",`      | trailing comma, offset 8            |
//! | `"a"=>"1`        | unterminated quoted string, offset 5 |
//! | `"a" "1"`        | expected `=>`, offset 4             |
//! | `"a\n"=>"1"`     | invalid escape, offset 2            |
//! | `"a"=>null`      | unexpected bare token, offset 5     |
//!
//! # Encodings
//!
//! Text produced by [`crate::to_string`] is a Rust `String`. Byte output
//! ([`crate::to_vec_with_options`], [`crate::to_writer_with_options`]) and
//! byte input ([`crate::from_slice_with_encoding`]) use an
//! [`Encoding`](crate::Encoding): UTF-8 by default, or UTF-16/UTF-32 in either
//! byte order, without a byte-order mark.
//!
//! ```rust
//! use serde_hstore::{to_vec_with_options, Encoding, HstoreOptions};
//!
//! let options = HstoreOptions::new().with_encoding(Encoding::Utf16Le);
//! let bytes = to_vec_with_options(&[("a", "1")], options).unwrap();
//! assert_eq!(bytes.len(), 2 * r#""a"=>"1""#.len());
//! ```
