//! Wire format: capitalized field names must round-trip exactly.

use keepintouch_frontend::models::{Friend, NewFriend};
use pretty_assertions::assert_eq;

#[test]
fn friend_deserializes_from_service_json() {
    let json = r#"{"ID":"1","Name":"Alice","LastContacted":"01/01/2021","Notes":"Loves coding"}"#;
    let f: Friend = serde_json::from_str(json).unwrap();
    assert_eq!(f.id, "1");
    assert_eq!(f.name, "Alice");
    assert_eq!(f.last_contacted, "01/01/2021");
    assert_eq!(f.notes, "Loves coding");
}

#[test]
fn friend_collection_deserializes_in_order() {
    let json = r#"[
        {"ID":"1","Name":"Alice","LastContacted":"01/01/2021","Notes":"Loves coding"},
        {"ID":"2","Name":"Bob","LastContacted":"01/01/2021","Notes":"Enjoys hiking"}
    ]"#;
    let list: Vec<Friend> = serde_json::from_str(json).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name, "Alice");
    assert_eq!(list[1].name, "Bob");
}

#[test]
fn missing_notes_defaults_to_empty() {
    let json = r#"{"ID":"3","Name":"Carol","LastContacted":"02/02/2022"}"#;
    let f: Friend = serde_json::from_str(json).unwrap();
    assert_eq!(f.notes, "");
}

#[test]
fn friend_serializes_with_capitalized_field_names() {
    let f = Friend {
        id: "7".to_string(),
        name: "Alice".to_string(),
        last_contacted: "01/01/2021".to_string(),
        notes: "".to_string(),
    };
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!(
        json,
        r#"{"ID":"7","Name":"Alice","LastContacted":"01/01/2021","Notes":""}"#
    );
}

#[test]
fn new_friend_post_body_matches_the_contract() {
    let f = NewFriend {
        name: "Jane Doe".to_string(),
        last_contacted: "06/06/2023".to_string(),
        notes: "".to_string(),
    };
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!(
        json,
        r#"{"Name":"Jane Doe","LastContacted":"06/06/2023","Notes":""}"#
    );
}

#[test]
fn friend_round_trips_unchanged() {
    let json = r#"{"ID":"1","Name":"Ümit","LastContacted":"31/01/2020","Notes":"likes \"quotes\""}"#;
    let f: Friend = serde_json::from_str(json).unwrap();
    let back = serde_json::to_string(&f).unwrap();
    assert_eq!(back, json);
}
