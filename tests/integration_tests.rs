use serde::{Deserialize, Serialize};
use serde_hstore::{
    coerce, from_str, hstore, parse, to_string, to_string_with_options, to_vec_with_options,
    to_writer_with_options, Encoding, Error, HstoreMap, HstoreOptions, Pair, Value,
};
use std::collections::{BTreeMap, HashMap};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Listing {
    title: String,
    price: u32,
    discount: Option<f64>,
    featured: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Tags {
    color: Option<String>,
    material: Option<String>,
}

#[test]
fn test_struct_with_text_fields() {
    let tags = Tags {
        color: Some("red".to_string()),
        material: None,
    };

    let hstore = to_string(&tags).unwrap();
    println!("Tags hstore: {}", hstore);
    assert_eq!(hstore, r#""color"=>"red","material"=>NULL"#);

    let tags_back: Tags = from_str(&hstore).unwrap();
    assert_eq!(tags, tags_back);
}

#[test]
fn test_struct_with_typed_fields_needs_value_map() {
    let listing = Listing {
        title: "Lamp".to_string(),
        price: 25,
        discount: Some(0.25),
        featured: true,
    };

    let err = to_string(&listing).unwrap_err();
    assert!(matches!(err, Error::NotText { key: Some(ref k), .. } if k == "price"));

    let options = HstoreOptions::new().with_value_map(coerce::to_text);
    let hstore = to_string_with_options(&listing, options).unwrap();
    assert_eq!(
        hstore,
        r#""title"=>"Lamp","price"=>"25","discount"=>"0.25","featured"=>"true""#
    );

    let listing_back: Listing = from_str(&hstore).unwrap();
    assert_eq!(listing, listing_back);
}

#[test]
fn test_json_value_map() {
    let options = HstoreOptions::new()
        .with_value_map(|value: &Value| serde_json::to_string(value).map_err(Error::custom));
    let pairs: Vec<(&str, Value)> = vec![
        ("a", Value::from(vec![Value::from(0), Value::from(1), Value::from(2)])),
        ("b", Value::from(2)),
    ];
    let hstore = to_string_with_options(&pairs, options).unwrap();
    assert_eq!(hstore, r#""a"=>"[0,1,2]","b"=>"2""#);
}

#[test]
fn test_hashmap_round_trip() {
    let mut map = HashMap::new();
    map.insert("surname".to_string(), Some("\u{d64d}".to_string()));
    map.insert("given".to_string(), None);

    let hstore = to_string(&map).unwrap();
    let back: HashMap<String, Option<String>> = from_str(&hstore).unwrap();
    assert_eq!(map, back);
}

#[test]
fn test_hstore_map_preserves_order() {
    let map = hstore! {
        "z" => "last letter",
        "a" => null,
        "m" => 13,
    };
    let hstore = to_string(&map).unwrap();
    assert_eq!(hstore, r#""z"=>"last letter","a"=>NULL,"m"=>"13""#);

    let back: HstoreMap = from_str(&hstore).unwrap();
    assert_eq!(back, map);
    assert_eq!(back.into_pairs()[0], Pair::new("z", Some("last letter")));
}

#[test]
fn test_pairs_reencode() {
    let input = r#""b"=>"2", "a"=>NULL"#;
    let pairs = parse(input).unwrap();
    assert_eq!(to_string(&pairs).unwrap(), r#""b"=>"2","a"=>NULL"#);

    let typed: Vec<Pair> = from_str(input).unwrap();
    assert_eq!(typed, pairs);
}

#[test]
fn test_btreemap_of_borrowed_values() {
    let input = r#""plain"=>"text","escaped"=>"say \"hi\"""#;
    let map: BTreeMap<String, String> = from_str(input).unwrap();
    assert_eq!(map["escaped"], "say \"hi\"");
    assert_eq!(map["plain"], "text");
}

#[test]
fn test_encoded_output() {
    let options = HstoreOptions::new().with_encoding(Encoding::Utf32Le);
    let bytes = to_vec_with_options(&[("surname", "\u{d64d}")], options.clone()).unwrap();
    assert_eq!(bytes.len(), 4 * "\"surname\"=>\"\u{d64d}\"".chars().count());

    let mut buffer = Vec::new();
    to_writer_with_options(&mut buffer, &[("surname", "\u{d64d}")], options).unwrap();
    assert_eq!(buffer, bytes);
}

#[test]
fn test_unknown_encoding_label() {
    let err = "shift_jis".parse::<Encoding>().unwrap_err();
    assert_eq!(err, Error::Configuration("unknown encoding: shift_jis".to_string()));
}

#[test]
fn test_invalid_source_shapes() {
    assert!(matches!(to_string(&"just text"), Err(Error::Configuration(_))));
    assert!(matches!(to_string(&true), Err(Error::Configuration(_))));
    assert!(matches!(
        to_string(&vec![("only-key",)]),
        Err(Error::Configuration(_))
    ));
}

#[test]
fn test_struct_rejects_extra_garbage() {
    let result: Result<Tags, Error> = from_str(r#""color"=>"red" junk"#);
    assert!(matches!(result, Err(Error::Syntax { offset: 15, .. })));
}
