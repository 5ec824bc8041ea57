use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flatpath::{flatten, to_value, unflatten, Map, PathOptions, Value};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Clone)]
struct Order {
    id: u32,
    customer: User,
    items: Vec<Product>,
    tags: Vec<String>,
}

fn sample_order(item_count: u32) -> Order {
    Order {
        id: 42,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            active: true,
        },
        items: (0..item_count)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect(),
        tags: vec![
            "important".to_string(),
            "verified".to_string(),
            "production".to_string(),
        ],
    }
}

fn benchmark_flatten_simple(c: &mut Criterion) {
    let options = PathOptions::default();
    let value = to_value(&User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    })
    .unwrap();

    c.bench_function("flatten_simple_struct", |b| {
        b.iter(|| flatten(black_box(&value), &options))
    });
}

fn benchmark_unflatten_simple(c: &mut Criterion) {
    let options = PathOptions::default();
    let value = to_value(&User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    })
    .unwrap();
    let flat = flatten(&value, &options);

    c.bench_function("unflatten_simple_struct", |b| {
        b.iter(|| unflatten(black_box(&flat), &options))
    });
}

fn benchmark_flatten_array(c: &mut Criterion) {
    let options = PathOptions::default();
    let mut group = c.benchmark_group("flatten_array");

    for size in [10, 50, 100, 500].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect();
        let value = to_value(&products).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| flatten(black_box(value), &options))
        });
    }
    group.finish();
}

fn benchmark_unflatten_array(c: &mut Criterion) {
    let options = PathOptions::default();
    let mut group = c.benchmark_group("unflatten_array");

    for size in [10, 50, 100, 500].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect();
        let flat = flatten(&to_value(&products).unwrap(), &options);

        group.bench_with_input(BenchmarkId::from_parameter(size), &flat, |b, flat| {
            b.iter(|| unflatten(black_box(flat), &options))
        });
    }
    group.finish();
}

fn benchmark_nested(c: &mut Criterion) {
    let options = PathOptions::default();
    let value = to_value(&sample_order(5)).unwrap();
    let flat = flatten(&value, &options);

    c.bench_function("flatten_nested_struct", |b| {
        b.iter(|| flatten(black_box(&value), &options))
    });

    c.bench_function("unflatten_nested_struct", |b| {
        b.iter(|| unflatten(black_box(&flat), &options))
    });
}

fn benchmark_delimiter_styles(c: &mut Criterion) {
    let mut group = c.benchmark_group("delimiter_styles");
    let value = to_value(&sample_order(5)).unwrap();

    let dotted = PathOptions::default();
    let wrapped = PathOptions::default()
        .with_prefix("{")
        .with_suffix("}")
        .with_suffix_end(true);
    let multichar = PathOptions::default().with_suffix("::");

    group.bench_function("flatten_dotted", |b| {
        b.iter(|| flatten(black_box(&value), &dotted))
    });

    group.bench_function("flatten_wrapped", |b| {
        b.iter(|| flatten(black_box(&value), &wrapped))
    });

    group.bench_function("flatten_multichar", |b| {
        b.iter(|| flatten(black_box(&value), &multichar))
    });

    let dotted_flat = flatten(&value, &dotted);
    let wrapped_flat = flatten(&value, &wrapped);
    let multichar_flat = flatten(&value, &multichar);

    group.bench_function("unflatten_dotted", |b| {
        b.iter(|| unflatten(black_box(&dotted_flat), &dotted))
    });

    group.bench_function("unflatten_wrapped", |b| {
        b.iter(|| unflatten(black_box(&wrapped_flat), &wrapped))
    });

    group.bench_function("unflatten_multichar", |b| {
        b.iter(|| unflatten(black_box(&multichar_flat), &multichar))
    });

    group.finish();
}

fn benchmark_tree_shapes(c: &mut Criterion) {
    let options = PathOptions::default();
    let mut group = c.benchmark_group("tree_shapes");

    let mut deep = Value::from("bottom");
    for level in (0..20).rev() {
        let mut map = Map::new();
        map.insert(format!("level{}", level), deep);
        deep = Value::Object(map);
    }

    let mut wide_map = Map::new();
    for i in 0..100 {
        wide_map.insert(format!("key{}", i), Value::from(i));
    }
    let wide = Value::Object(wide_map);

    group.bench_function("flatten_deep", |b| {
        b.iter(|| flatten(black_box(&deep), &options))
    });

    group.bench_function("flatten_wide", |b| {
        b.iter(|| flatten(black_box(&wide), &options))
    });

    let deep_flat = flatten(&deep, &options);
    let wide_flat = flatten(&wide, &options);

    group.bench_function("unflatten_deep", |b| {
        b.iter(|| unflatten(black_box(&deep_flat), &options))
    });

    group.bench_function("unflatten_wide", |b| {
        b.iter(|| unflatten(black_box(&wide_flat), &options))
    });

    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    let mut group = c.benchmark_group("comparison");

    group.bench_function("flatpath_to_value", |b| {
        b.iter(|| flatpath::to_value(black_box(&user)))
    });

    group.bench_function("json_to_value", |b| {
        b.iter(|| serde_json::to_value(black_box(&user)))
    });

    let value = flatpath::to_value(&user).unwrap();
    let json_value = serde_json::to_value(&user).unwrap();

    group.bench_function("flatpath_from_value", |b| {
        b.iter(|| flatpath::from_value::<User>(black_box(value.clone())))
    });

    group.bench_function("json_from_value", |b| {
        b.iter(|| serde_json::from_value::<User>(black_box(json_value.clone())))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let options = PathOptions::default();
    let value = to_value(&sample_order(5)).unwrap();

    c.bench_function("roundtrip_nested", |b| {
        b.iter(|| {
            let flat = flatten(black_box(&value), &options);
            let _rebuilt = unflatten(black_box(&flat), &options).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_flatten_simple,
    benchmark_unflatten_simple,
    benchmark_flatten_array,
    benchmark_unflatten_array,
    benchmark_nested,
    benchmark_delimiter_styles,
    benchmark_tree_shapes,
    benchmark_comparison_with_json,
    benchmark_roundtrip
);
criterion_main!(benches);
