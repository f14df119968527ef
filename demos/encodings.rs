//! Writing and reading hstore text in UTF-16 and UTF-32.
//!
//! Run with: cargo run --example encodings
//! Set RUST_LOG=trace to see the per-pair events.

use serde_hstore::{
    from_slice_with_encoding, to_vec_with_options, to_writer_with_options, Encoding, HstoreMap,
    HstoreOptions,
};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let pairs = vec![("surname", Some("\u{d64d}")), ("given", None)];

    for label in ["utf-8", "utf-16le", "UTF-16BE", "utf-32le", "utf-32be"] {
        let encoding: Encoding = label.parse()?;
        let options = HstoreOptions::new().with_encoding(encoding);
        let bytes = to_vec_with_options(&pairs, options)?;
        let map: HstoreMap = from_slice_with_encoding(&bytes, encoding)?;
        println!("{:<9} {:>3} bytes -> {:?}", encoding, bytes.len(), map);
    }

    println!();
    let options = HstoreOptions::new().with_encoding(Encoding::Utf8);
    to_writer_with_options(io::stdout(), &pairs, options)?;
    println!();

    Ok(())
}
