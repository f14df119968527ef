//! Stock coercion hooks for non-text keys and values.
//!
//! Any `Fn(&Value) -> Result<String>` works as a hook; these cover the
//! common cases.
//!
//! ```rust
//! use serde_hstore::{coerce, to_string_with_options, HstoreOptions};
//!
//! let options = HstoreOptions::new().with_value_map(coerce::to_text);
//! let hstore = to_string_with_options(&[("n", 1.5)], options).unwrap();
//! assert_eq!(hstore, r#""n"=>"1.5""#);
//! ```

use crate::{Result, Value};

/// Renders the value with its [`Display`](std::fmt::Display) form.
pub fn to_text(value: &Value) -> Result<String> {
    Ok(value.to_string())
}

/// Renders the value as compact JSON.
///
/// ```rust
/// use serde_hstore::{coerce, to_string_with_options, HstoreOptions};
///
/// let options = HstoreOptions::new().with_value_map(coerce::json);
/// let hstore = to_string_with_options(&[("a", vec![0, 1, 2])], options).unwrap();
/// assert_eq!(hstore, r#""a"=>"[0,1,2]""#);
/// ```
#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
pub fn json(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(crate::Error::custom)
}
