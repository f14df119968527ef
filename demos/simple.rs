//! Basic hstore serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_hstore::{from_str, parse, to_string, HstoreMap};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Profile {
    name: String,
    city: String,
    nickname: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let profile = Profile {
        name: "Alice \"Al\" Johnson".to_string(),
        city: "Seoul".to_string(),
        nickname: None,
    };

    let hstore = to_string(&profile)?;
    println!("hstore output:\n{}\n", hstore);

    let profile_back: Profile = from_str(&hstore)?;
    assert_eq!(profile, profile_back);
    println!("✓ Round-trip successful");

    // Raw pairs keep order and duplicates
    for pair in parse(r#""tag"=>"a", "tag"=>"b", "note"=>NULL"#)? {
        println!("{} => {:?}", pair.key, pair.value);
    }

    let map: HstoreMap = from_str(r#""tag"=>"a", "tag"=>"b""#)?;
    println!("\nAs a map: {:?}", map);

    Ok(())
}
