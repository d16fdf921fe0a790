#![allow(dead_code)]

use freerider::sql::QueryBuf;
use freerider::{connect, ensure_tables, Store};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Fresh in-memory store with tables, two customers and three vehicles.
/// Vehicle 1003 has zero seats and never passes entity rules.
pub async fn store() -> Arc<dyn Store> {
    let store = connect("sqlite::memory:", 1).await.expect("sqlite store");
    ensure_tables(store.as_ref()).await.expect("tables");
    for sql in [
        r#"INSERT INTO "customer" ("id", "name", "contact", "status") VALUES (54, 'Meyer, Eric', 'eme22@gmail.com', 'Active')"#,
        r#"INSERT INTO "customer" ("id", "name", "contact", "status") VALUES (55, 'Sommer, Tina', '030 22458 29425', 'Active')"#,
        r#"INSERT INTO "vehicle" ("id", "make", "model", "seats", "category", "power", "status") VALUES (1001, 'VW', 'Golf', 4, 'Sedan', 110, 'Active')"#,
        r#"INSERT INTO "vehicle" ("id", "make", "model", "seats", "category", "power", "status") VALUES (1002, 'VW', 'Golf', 4, 'Sedan', 110, 'Active')"#,
        r#"INSERT INTO "vehicle" ("id", "make", "model", "seats", "category", "power", "status") VALUES (1003, 'Tesla', 'Model 3', 0, 'Sedan', 208, 'Serviced')"#,
    ] {
        exec(store.as_ref(), sql).await;
    }
    store
}

pub async fn exec(store: &dyn Store, sql: &str) -> u64 {
    store.execute(&QueryBuf::raw(sql)).await.expect(sql)
}

pub fn attrs(v: Value) -> HashMap<String, Value> {
    match v {
        Value::Object(m) => m.into_iter().collect(),
        other => panic!("object expected, got {other}"),
    }
}

pub fn booking(id: i64) -> Value {
    json!({
        "id": id,
        "customer_id": 54,
        "vehicle_id": 1002,
        "begin": "2022-12-20 10:00:00",
        "end": "2022-12-20 20:00:00",
        "pickup": "Berlin Wedding",
        "dropoff": "Berlin Wedding",
        "status": "Booked"
    })
}
