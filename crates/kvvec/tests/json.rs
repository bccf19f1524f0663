#![cfg(feature = "serde_json")]

use std::collections::BTreeMap;

use kvvec::{Decode, Encode, Error, Json, KvVec, MemoryStore, Store, element_key};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn test_json_vec() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::new();
    let mut vec: KvVec<_, Json<Point>> = KvVec::new(&store, "points");

    vec.push(Json(Point { x: 1, y: 2 }))?;
    vec.push(Json(Point { x: -3, y: 4 }))?;

    assert_eq!(
        store.get(&element_key("points", 0))?,
        Some(br#"{"x":1,"y":2}"#.to_vec())
    );

    let Json(old) = vec.replace(0, Json(Point { x: 0, y: 0 }))?;
    assert_eq!(old, Point { x: 1, y: 2 });
    assert_eq!(vec.pop()?.0, Point { x: -3, y: 4 });
    assert_eq!(vec.len(), 1);

    Ok(())
}

#[test]
fn test_json_malformed() {
    assert!(matches!(
        Json::<Point>::from_bytes(b"{\"x\":1}"),
        Err(Error::SerdeJSON(_))
    ));
}

#[test]
#[should_panic(expected = "Value can't be serialized to JSON")]
fn test_json_unserializable_is_fatal() {
    let grid = BTreeMap::from([((0, 1), "a")]);
    let _ = Json(grid).to_bytes();
}
