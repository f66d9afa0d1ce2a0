use courier::orders::{self, Error};
use courier::prelude::*;

fn seeded() -> OrderStore {
    let mut store = OrderStore::new();
    store.insert_many(orders::samples()).unwrap();
    store
}

#[test]
fn matches_customer_name_case_insensitively() {
    let store = seeded();
    let hits = store.search("sarah").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].customer_name, "Sarah Johnson");
}

#[test]
fn matches_delivery_address() {
    let store = seeded();
    let hits = store.search("AVE").unwrap();
    let names: Vec<_> = hits.iter().map(|o| o.customer_name.as_str()).collect();
    assert_eq!(names, vec!["Mike Davis", "Emily Wilson", "David Brown"]);
}

#[test]
fn query_is_a_pattern() {
    let store = seeded();
    let hits = store.search("^(john|mike)").unwrap();
    assert_eq!(hits.len(), 2);
}

#[test]
fn invalid_pattern_matches_literally() {
    let mut store = seeded();
    store
        .insert(NewOrder {
            customer_name: "Unit (4".into(),
            delivery_address: "1 Side St".into(),
            latitude: None,
            longitude: None,
            status: "pending".into(),
        })
        .unwrap();
    let hits = store.search("(4").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].customer_name, "Unit (4");
}

#[test]
fn blank_query_is_rejected() {
    let store = seeded();
    assert!(matches!(store.search("   "), Err(Error::EmptyQuery)));
}

#[test]
fn no_hits() {
    let store = seeded();
    assert!(store.search("Chicago").unwrap().is_empty());
}
