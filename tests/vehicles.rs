mod common;

use common::store;
use freerider::VehicleAccess;

#[tokio::test]
async fn count_includes_rows_that_fail_entity_rules() {
    let store = store().await;
    assert_eq!(VehicleAccess::count(store.as_ref()).await.unwrap(), 3);
    let all = VehicleAccess::find_all(store.as_ref()).await.unwrap();
    assert_eq!(all.iter().map(|v| v.id).collect::<Vec<_>>(), vec![1001, 1002]);
}

#[tokio::test]
async fn find_by_id() {
    let store = store().await;
    let golf = VehicleAccess::find_by_id(store.as_ref(), 1001).await.unwrap().unwrap();
    assert_eq!(golf.make, "VW");
    assert_eq!(golf.seats, 4);
    assert!(VehicleAccess::find_by_id(store.as_ref(), 1003).await.unwrap().is_none());
    assert!(VehicleAccess::find_by_id(store.as_ref(), 5).await.unwrap().is_none());
}

#[tokio::test]
async fn find_all_by_ids_skips_unknown_and_invalid() {
    let store = store().await;
    let found = VehicleAccess::find_all_by_ids(store.as_ref(), &[1003, 1002, 42]).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 1002);
}

#[tokio::test]
async fn find_all_by_ids_ignores_duplicates() {
    let store = store().await;
    let found = VehicleAccess::find_all_by_ids(store.as_ref(), &[1002, 1001, 1002, 1001]).await.unwrap();
    assert_eq!(found.iter().map(|v| v.id).collect::<Vec<_>>(), vec![1001, 1002]);
}
