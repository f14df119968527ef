/// Builds an [`HstoreMap`](crate::HstoreMap) from `key => value` literals.
///
/// Keys and values go through `ToString`; the bare word `null` makes a
/// `NULL` value. Values that are more than one token need parentheses.
///
/// ```rust
/// use serde_hstore::{hstore, to_string};
///
/// let map = hstore! {
///     "name" => "Alice",
///     "age" => 30,
///     "nickname" => null,
/// };
/// assert_eq!(to_string(&map).unwrap(), r#""name"=>"Alice","age"=>"30","nickname"=>NULL"#);
/// ```
#[macro_export]
macro_rules! hstore {
    (@value null) => {
        ::core::option::Option::None::<::std::string::String>
    };

    (@value $value:expr) => {
        ::core::option::Option::Some(::std::string::ToString::to_string(&$value))
    };

    () => {
        $crate::HstoreMap::new()
    };

    ($($key:expr => $value:tt),+ $(,)?) => {{
        let mut map = $crate::HstoreMap::new();
        $(
            map.insert(
                ::std::string::ToString::to_string(&$key),
                $crate::hstore!(@value $value),
            );
        )+
        map
    }};
}

#[cfg(test)]
mod tests {
    use crate::HstoreMap;

    #[test]
    fn test_hstore_macro_empty() {
        assert_eq!(hstore! {}, HstoreMap::new());
    }

    #[test]
    fn test_hstore_macro_values() {
        let suffix = "x";
        let map = hstore! {
            "text" => "plain",
            "number" => 42,
            "nothing" => null,
            "computed" => (format!("a{}", suffix)),
        };
        assert_eq!(map.len(), 4);
        assert_eq!(map.get_str("text"), Some("plain"));
        assert_eq!(map.get_str("number"), Some("42"));
        assert_eq!(map.get("nothing"), Some(&None));
        assert_eq!(map.get_str("computed"), Some("ax"));
    }
}
