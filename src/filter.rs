//! Pure name filtering - no side effects, easy to test.

use crate::models::Friend;

/// Case-insensitive substring match of `filter_text` against each
/// friend's name. Source order is preserved; an empty filter keeps
/// everyone.
pub fn filter_friends(friends: &[Friend], filter_text: &str) -> Vec<Friend> {
    if filter_text.is_empty() {
        return friends.to_vec();
    }
    let needle = filter_text.to_lowercase();
    friends
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
