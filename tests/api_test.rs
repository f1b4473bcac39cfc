//! Endpoint URL construction and base URL handling (no network).

use keepintouch_frontend::api::{friend_url, friends_url, random_friend_url};
use keepintouch_frontend::config;
use pretty_assertions::assert_eq;

#[test]
fn urls_follow_the_service_contract() {
    let base = "http://localhost:8080";
    assert_eq!(friends_url(base), "http://localhost:8080/friends");
    assert_eq!(
        random_friend_url(base),
        "http://localhost:8080/friends/random"
    );
    assert_eq!(friend_url(base, "42"), "http://localhost:8080/friends/42");
}

#[test]
fn trailing_slashes_on_the_base_are_ignored() {
    assert_eq!(
        friends_url("http://example.com/"),
        "http://example.com/friends"
    );
    assert_eq!(
        friend_url("http://example.com/", "1"),
        "http://example.com/friends/1"
    );
}

#[test]
fn default_base_url_is_the_local_service() {
    assert_eq!(config::DEFAULT_BASE_URL, "http://localhost:8080");
}
