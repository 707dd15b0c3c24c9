use super::*;
use chrono::TimeZone;

fn wire_list_json() -> serde_json::Value {
    serde_json::json!({
        "id": "3f1c",
        "username": "alice",
        "name": "Weekend",
        "is_public": false,
        "created_at": "2024-05-01T12:30:00.123456Z",
        "items": [
            { "id": "i1", "text": "Milk", "completed": true, "created_at": "2024-05-01T13:00:00+02:00" },
            { "id": "i2", "text": "Eggs", "completed": false, "created_at": "2024-05-01T14:00:00Z" }
        ]
    })
}

#[test]
fn wire_list_transforms_into_domain_list() {
    let wire: WireList = serde_json::from_value(wire_list_json()).unwrap();
    let list = GroceryList::try_from(wire).unwrap();

    assert_eq!(list.id, "3f1c");
    assert_eq!(list.username, "alice");
    assert!(!list.is_public);
    assert_eq!(list.created_at.timestamp(), Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap().timestamp());
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[0].text, "Milk");
}

#[test]
fn item_offsets_are_normalized_to_utc() {
    let wire: WireList = serde_json::from_value(wire_list_json()).unwrap();
    let list = GroceryList::try_from(wire).unwrap();
    assert_eq!(list.items[0].created_at, Utc.with_ymd_and_hms(2024, 5, 1, 11, 0, 0).unwrap());
}

#[test]
fn missing_items_default_to_empty() {
    let wire: WireList = serde_json::from_value(serde_json::json!({
        "id": "l1",
        "username": "bob",
        "name": "Party",
        "is_public": true,
        "created_at": "2024-01-01T00:00:00Z"
    }))
    .unwrap();
    let list = GroceryList::try_from(wire).unwrap();
    assert!(list.items.is_empty());
}

#[test]
fn bad_timestamp_is_a_decode_error() {
    let wire = WireItem { id: "i1".into(), text: "Milk".into(), completed: false, created_at: "yesterday".into() };
    let err = GroceryItem::try_from(wire).unwrap_err();
    assert!(err.message().starts_with("Unexpected response from server"));
}

#[test]
fn completed_count_and_has_completed() {
    let wire: WireList = serde_json::from_value(wire_list_json()).unwrap();
    let mut list = GroceryList::try_from(wire).unwrap();
    assert_eq!(list.completed_count(), 1);
    assert!(list.has_completed());

    list.items.retain(|item| !item.completed);
    assert_eq!(list.completed_count(), 0);
    assert!(!list.has_completed());
}

#[test]
fn create_body_serializes_snake_case() {
    let body = CreateListBody { username: "alice", name: "Weekend", is_public: true };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "username": "alice", "name": "Weekend", "is_public": true })
    );
}
