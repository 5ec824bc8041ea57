use flatpath::{
    flat, flatten, flatten_into, from_value, to_value, unflatten, unflatten_into, Map, Number,
    PathOptions, Value,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let options = PathOptions::default();
    let flat = flatten(&to_value(&user).unwrap(), &options);
    println!("User paths: {:?}", flat.keys().collect::<Vec<_>>());

    assert_eq!(flat.get("id"), Some(&Value::Number(Number::Integer(123))));
    assert_eq!(flat.get("name"), Some(&Value::String("Alice".to_string())));
    assert_eq!(flat.get("tags[0]"), Some(&Value::String("admin".to_string())));
    assert_eq!(
        flat.get("tags[1]"),
        Some(&Value::String("developer".to_string()))
    );

    let user_back: User = from_value(unflatten(&flat, &options).unwrap()).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_nested_struct() {
    let order = Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.99,
                quantity: 1,
            },
        ],
        total: 109.97,
    };

    let options = PathOptions::default();
    let flat = flatten(&to_value(&order).unwrap(), &options);
    println!("Order paths: {:?}", flat.keys().collect::<Vec<_>>());

    assert_eq!(
        flat.get("customer.name"),
        Some(&Value::String("Alice".to_string()))
    );
    assert_eq!(
        flat.get("customer.tags[0]"),
        Some(&Value::String("vip".to_string()))
    );
    // Objects below a list index continue without a fresh separator
    assert_eq!(
        flat.get("items[0]sku"),
        Some(&Value::String("WIDGET-001".to_string()))
    );
    assert_eq!(
        flat.get("items[1]quantity"),
        Some(&Value::Number(Number::Integer(1)))
    );

    let order_back: Order = from_value(unflatten(&flat, &options).unwrap()).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_array_of_objects() {
    let products = vec![
        Product {
            sku: "A001".to_string(),
            price: 10.99,
            quantity: 5,
        },
        Product {
            sku: "B002".to_string(),
            price: 15.99,
            quantity: 3,
        },
        Product {
            sku: "C003".to_string(),
            price: 20.99,
            quantity: 1,
        },
    ];

    let options = PathOptions::default();
    let flat = flatten(&to_value(&products).unwrap(), &options);
    assert_eq!(flat.len(), 9);

    let products_back: Vec<Product> = from_value(unflatten(&flat, &options).unwrap()).unwrap();
    assert_eq!(products, products_back);
}

#[test]
fn test_primitive_leaves() {
    assert_roundtrip(&vec![42i32, -7, 0]);
    assert_roundtrip(&vec![3.5f64, -2.25]);
    assert_roundtrip(&vec![true, false]);
    assert_roundtrip(&vec!["hello world".to_string(), "".to_string()]);
}

#[test]
fn test_options() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };
    let value = to_value(&user).unwrap();

    // Wrapped style
    let options = PathOptions::new()
        .with_prefix("{")
        .with_suffix("}")
        .with_suffix_end(true);
    let flat = flatten(&value, &options);
    println!("Wrapped paths: {:?}", flat.keys().collect::<Vec<_>>());
    assert_eq!(flat.get("{name}"), Some(&Value::String("Alice".to_string())));

    let user_back: User = from_value(unflatten(&flat, &options).unwrap()).unwrap();
    assert_eq!(user, user_back);

    // Slash separators, no list markers
    let options = PathOptions::new()
        .with_suffix("/")
        .with_list_prefix("")
        .with_list_suffix("");
    let flat = flatten(&value, &options);
    println!("Slash paths: {:?}", flat.keys().collect::<Vec<_>>());
    assert_eq!(
        flat.get("tags/0"),
        Some(&Value::String("admin".to_string()))
    );

    let user_back: User = from_value(unflatten(&flat, &options).unwrap()).unwrap();
    assert_eq!(user, user_back);

    // Multi-character separator
    let options = PathOptions::new()
        .with_suffix("::")
        .with_list_prefix("")
        .with_list_suffix("");
    let flat = flatten(&value, &options);
    assert_eq!(
        flat.get("tags::1"),
        Some(&Value::String("developer".to_string()))
    );

    let user_back: User = from_value(unflatten(&flat, &options).unwrap()).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_to_value() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string()],
    };

    let value = to_value(&user).unwrap();

    match value {
        Value::Object(obj) => {
            assert_eq!(obj.get("id"), Some(&Value::Number(Number::Integer(123))));
            assert_eq!(obj.get("name"), Some(&Value::String("Alice".to_string())));
            assert_eq!(obj.get("active"), Some(&Value::Bool(true)));

            if let Some(Value::Array(tags)) = obj.get("tags") {
                assert_eq!(tags.len(), 1);
                assert_eq!(tags[0], Value::String("admin".to_string()));
            } else {
                panic!("Expected tags to be an array");
            }
        }
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_empty_collections_as_leaves() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Holder {
        items: Vec<i32>,
        notes: std::collections::BTreeMap<String, String>,
    }

    let holder = Holder {
        items: vec![],
        notes: std::collections::BTreeMap::new(),
    };

    let options = PathOptions::default();
    let flat = flatten(&to_value(&holder).unwrap(), &options);

    // Empty containers transfer verbatim as leaf values
    assert_eq!(flat.get("items"), Some(&Value::Array(vec![])));
    assert_eq!(flat.get("notes"), Some(&Value::Object(Map::new())));

    let holder_back: Holder = from_value(unflatten(&flat, &options).unwrap()).unwrap();
    assert_eq!(holder, holder_back);
}

#[test]
fn test_special_strings_as_values() {
    // Values are never parsed, so delimiter characters in them survive
    let strings = vec![
        "".to_string(),
        "hello, world".to_string(),
        "a.b".to_string(),
        "tags[0]".to_string(),
        "{wrapped}".to_string(),
        "true".to_string(),
        "123".to_string(),
        " leading space".to_string(),
        "trailing space ".to_string(),
    ];

    for s in &strings {
        println!("Testing string: {:?}", s);
    }
    assert_roundtrip(&strings);
}

#[test]
fn test_numbers() {
    assert_roundtrip(&vec![0i8, 127, -128]);
    assert_roundtrip(&vec![0i16, 32767, -32768]);
    assert_roundtrip(&vec![0i32, 2147483647, -2147483648]);
    assert_roundtrip(&vec![0i64, i64::MAX, i64::MIN]);

    assert_roundtrip(&vec![0u8, 255]);
    assert_roundtrip(&vec![0u16, 65535]);
    assert_roundtrip(&vec![0u32, 4294967295]);

    assert_roundtrip(&vec![0.0f32, 3.5, -2.5]);
    assert_roundtrip(&vec![0.0f64, 4.25, -5.75]);
}

#[test]
fn test_accumulation() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Host {
        host: String,
        port: u16,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Cluster {
        primary: Host,
        replica: Host,
    }

    let primary = Host {
        host: "db1".to_string(),
        port: 5432,
    };
    let replica = Host {
        host: "db2".to_string(),
        port: 5433,
    };

    let options = PathOptions::default();
    let mut flat = Map::new();
    flatten_into(&to_value(&primary).unwrap(), &mut flat, &options, "primary.");
    flatten_into(&to_value(&replica).unwrap(), &mut flat, &options, "replica.");

    assert_eq!(flat.len(), 4);
    assert_eq!(
        flat.get("primary.host"),
        Some(&Value::String("db1".to_string()))
    );
    assert_eq!(
        flat.get("replica.port"),
        Some(&Value::Number(Number::Integer(5433)))
    );

    let cluster: Cluster = from_value(unflatten(&flat, &options).unwrap()).unwrap();
    assert_eq!(cluster.primary, primary);
    assert_eq!(cluster.replica, replica);
}

#[test]
fn test_additive_expansion() {
    let options = PathOptions::default();

    let first = {
        let mut map = Map::new();
        map.insert("servers[0]".to_string(), flat!("db1"));
        map
    };
    let second = {
        let mut map = Map::new();
        map.insert("servers[1]".to_string(), flat!("db2"));
        map
    };

    let mut destination = Map::new();
    unflatten_into(&first, &mut destination, &options, "").unwrap();
    unflatten_into(&second, &mut destination, &options, "").unwrap();

    // The raw tree stays keyed until promotion
    assert_eq!(
        destination.get("servers"),
        Some(&flat!({"0": "db1", "1": "db2"}))
    );

    let mut value = Value::Object(destination);
    value.promote_lists();
    assert_eq!(value, flat!({"servers": ["db1", "db2"]}));
}

#[test]
fn test_later_entries_win() {
    let options = PathOptions::default();

    let mut flat = Map::new();
    flat.insert("a.b".to_string(), flat!(1));
    flat.insert("a.b.c".to_string(), flat!(2));

    // "a.b" becomes a container on the way to "a.b.c"
    let value = unflatten(&flat, &options).unwrap();
    assert_eq!(value, flat!({"a": {"b": {"c": 2}}}));
}

#[test]
fn test_serde_json_interop() {
    let json = serde_json::json!({
        "user": {
            "name": "Alice",
            "scores": [10, 20]
        },
        "active": true
    });

    let options = PathOptions::default();
    let value = to_value(&json).unwrap();
    let flat = flatten(&value, &options);

    assert_eq!(
        flat.get("user.name"),
        Some(&Value::String("Alice".to_string()))
    );
    assert_eq!(
        flat.get("user.scores[0]"),
        Some(&Value::Number(Number::Integer(10)))
    );
    assert_eq!(flat.get("active"), Some(&Value::Bool(true)));

    let back: serde_json::Value = from_value(unflatten(&flat, &options).unwrap()).unwrap();
    assert_eq!(back, json);
}

#[test]
fn test_date_and_bigint_leaves() {
    use chrono::TimeZone;
    use num_bigint::BigInt;

    let date = chrono::Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let big: BigInt = "170141183460469231731687303715884105727".parse().unwrap();

    let mut source = Map::new();
    source.insert("created".to_string(), Value::Date(date));
    source.insert("large".to_string(), Value::BigInt(big.clone()));
    let value = Value::Object(source);

    let options = PathOptions::default();
    let flat = flatten(&value, &options);
    assert_eq!(flat.get("created"), Some(&Value::Date(date)));
    assert_eq!(flat.get("large"), Some(&Value::BigInt(big)));

    let back = unflatten(&flat, &options).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_u64_overflow_round_trip() {
    let values = vec![u64::MAX, i64::MAX as u64, 0];

    let options = PathOptions::default();
    let flat = flatten(&to_value(&values).unwrap(), &options);
    assert_eq!(
        flat.get("[0]"),
        Some(&Value::BigInt(num_bigint::BigInt::from(u64::MAX)))
    );

    let back: Vec<u64> = from_value(unflatten(&flat, &options).unwrap()).unwrap();
    assert_eq!(back, values);
}

fn assert_roundtrip<T>(original: &T)
where
    T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug,
{
    let options = PathOptions::default();
    let flat = flatten(&to_value(original).unwrap(), &options);
    let deserialized: T = from_value(unflatten(&flat, &options).unwrap()).unwrap();
    assert_eq!(*original, deserialized);
}
