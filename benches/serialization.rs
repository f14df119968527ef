use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_hstore::{
    coerce, from_str, parse, to_string, to_string_with_options, to_vec_with_options, Encoding,
    HstoreMap, HstoreOptions,
};

#[derive(Serialize, Deserialize, Clone)]
struct Address {
    street: String,
    city: String,
    postcode: Option<String>,
    country: String,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
    discontinued: bool,
}

fn attribute_map(size: u32) -> HstoreMap {
    (0..size)
        .map(|i| {
            let value = if i % 5 == 0 {
                None
            } else {
                Some(format!("value {}", i))
            };
            (format!("attr_{}", i), value)
        })
        .collect()
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let address = Address {
        street: "1 Infinite Loop".to_string(),
        city: "Cupertino".to_string(),
        postcode: None,
        country: "US".to_string(),
    };

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&address)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let hstore = r#""street"=>"1 Infinite Loop","city"=>"Cupertino","postcode"=>NULL,"country"=>"US""#;

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<Address>(black_box(hstore)))
    });
}

fn benchmark_coerced_struct(c: &mut Criterion) {
    let product = Product {
        sku: "SKU-1".to_string(),
        price: 9.99,
        quantity: 3,
        discontinued: false,
    };
    let options = HstoreOptions::new().with_value_map(coerce::to_text);
    let hstore = to_string_with_options(&product, options.clone()).unwrap();

    c.bench_function("serialize_coerced_struct", |b| {
        b.iter(|| to_string_with_options(black_box(&product), options.clone()))
    });
    c.bench_function("deserialize_typed_struct", |b| {
        b.iter(|| from_str::<Product>(black_box(&hstore)))
    });
}

fn benchmark_serialize_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_map");

    for size in [10, 50, 100, 500].iter() {
        let map = attribute_map(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &map, |b, map| {
            b.iter(|| to_string(black_box(map)))
        });
    }
    group.finish();
}

fn benchmark_parse_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_map");

    for size in [10, 50, 100, 500].iter() {
        let hstore = to_string(&attribute_map(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &hstore, |b, hstore| {
            b.iter(|| parse(black_box(hstore)))
        });
    }
    group.finish();
}

fn benchmark_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("escaping");

    let plain = vec![("key", "plain text without specials ".repeat(20))];
    let escaped = vec![("key", r#"quote " and backslash \ "#.repeat(20))];
    let plain_hstore = to_string(&plain).unwrap();
    let escaped_hstore = to_string(&escaped).unwrap();

    group.bench_function("serialize_plain", |b| b.iter(|| to_string(black_box(&plain))));
    group.bench_function("serialize_escaped", |b| {
        b.iter(|| to_string(black_box(&escaped)))
    });
    group.bench_function("parse_plain", |b| b.iter(|| parse(black_box(&plain_hstore))));
    group.bench_function("parse_escaped", |b| {
        b.iter(|| parse(black_box(&escaped_hstore)))
    });
    group.finish();
}

fn benchmark_encodings(c: &mut Criterion) {
    let mut group = c.benchmark_group("encodings");
    let map = attribute_map(100);

    for encoding in [Encoding::Utf8, Encoding::Utf16Le, Encoding::Utf32Be] {
        let options = HstoreOptions::new().with_encoding(encoding);
        group.bench_with_input(
            BenchmarkId::from_parameter(encoding),
            &options,
            |b, options| b.iter(|| to_vec_with_options(black_box(&map), options.clone())),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_coerced_struct,
    benchmark_serialize_map,
    benchmark_parse_map,
    benchmark_escaping,
    benchmark_encodings
);
criterion_main!(benches);
