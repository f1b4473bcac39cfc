//! Name filtering: membership iff case-insensitive substring, order kept.

use keepintouch_frontend::filter::filter_friends;
use keepintouch_frontend::models::Friend;
use pretty_assertions::assert_eq;

fn friend(id: &str, name: &str) -> Friend {
    Friend {
        id: id.to_string(),
        name: name.to_string(),
        last_contacted: "01/01/2021".to_string(),
        notes: String::new(),
    }
}

fn names(friends: &[Friend]) -> Vec<&str> {
    friends.iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn empty_filter_keeps_everyone() {
    let all = vec![friend("1", "Alice"), friend("2", "Bob")];
    assert_eq!(filter_friends(&all, ""), all);
}

#[test]
fn matches_are_case_insensitive() {
    let all = vec![friend("1", "Alice"), friend("2", "Bob")];
    assert_eq!(names(&filter_friends(&all, "aLiCe")), vec!["Alice"]);
    assert_eq!(names(&filter_friends(&all, "BOB")), vec!["Bob"]);
}

#[test]
fn substring_anywhere_in_name_matches() {
    let all = vec![
        friend("1", "Alice"),
        friend("2", "Malia"),
        friend("3", "Bob"),
    ];
    // "li" hits Alice and Malia but not Bob.
    assert_eq!(names(&filter_friends(&all, "li")), vec!["Alice", "Malia"]);
}

#[test]
fn non_matching_text_filters_everyone_out() {
    let all = vec![friend("1", "Alice"), friend("2", "Bob")];
    assert!(filter_friends(&all, "zzz").is_empty());
}

#[test]
fn source_order_is_preserved() {
    let all = vec![
        friend("3", "Carol"),
        friend("1", "Carmen"),
        friend("2", "Oscar"),
    ];
    assert_eq!(
        names(&filter_friends(&all, "car")),
        vec!["Carol", "Carmen"]
    );
}

#[test]
fn filter_only_looks_at_name_not_notes() {
    let mut f = friend("1", "Alice");
    f.notes = "met at the bob party".to_string();
    let all = vec![f, friend("2", "Bob")];
    assert_eq!(names(&filter_friends(&all, "bob")), vec!["Bob"]);
}
