//! HTTP client for the friends service (list, random pick, create, update).
//!
//! Every function maps a non-2xx status to `ApiError::Status` so callers
//! treat it the same as a transport failure: log it, leave the view as
//! is, never crash.

use crate::config;
use crate::models::{Friend, NewFriend};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}

fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

pub fn friends_url(base: &str) -> String {
    format!("{}/friends", base.trim_end_matches('/'))
}

pub fn random_friend_url(base: &str) -> String {
    format!("{}/friends/random", base.trim_end_matches('/'))
}

pub fn friend_url(base: &str, id: &str) -> String {
    format!("{}/friends/{}", base.trim_end_matches('/'), id)
}

/// GET /friends -> full collection, in service order.
pub async fn fetch_friends() -> Result<Vec<Friend>, ApiError> {
    let url = friends_url(&config::base_url());
    let resp = reqwest::Client::new().get(&url).send().await?;
    let friends = check_status(resp)?.json::<Vec<Friend>>().await?;
    Ok(friends)
}

/// GET /friends/random -> one friend, selection policy owned by the service.
pub async fn fetch_random_friend() -> Result<Friend, ApiError> {
    let url = random_friend_url(&config::base_url());
    let resp = reqwest::Client::new().get(&url).send().await?;
    let friend = check_status(resp)?.json::<Friend>().await?;
    Ok(friend)
}

/// POST /friends with `{Name, LastContacted, Notes}`.
pub async fn create_friend(friend: &NewFriend) -> Result<(), ApiError> {
    let url = friends_url(&config::base_url());
    let resp = reqwest::Client::new().post(&url).json(friend).send().await?;
    check_status(resp)?;
    Ok(())
}

/// PUT /friends/{ID} with the full updated record.
pub async fn update_friend(friend: &Friend) -> Result<(), ApiError> {
    let url = friend_url(&config::base_url(), &friend.id);
    let resp = reqwest::Client::new().put(&url).json(friend).send().await?;
    check_status(resp)?;
    Ok(())
}
