use serde::{Deserialize, Serialize};

/// A friend as the service sends it. Field names on the wire are
/// capitalized (`ID`, `Name`, ...) and must round-trip exactly, hence
/// the renames. `id` is assigned by the service and never edited here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Friend {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    /// DD/MM/YYYY when set; free text is rejected before any save.
    pub last_contacted: String,
    #[serde(default)]
    pub notes: String,
}

/// POST payload for a friend that does not exist yet (no ID; the service
/// assigns one).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewFriend {
    pub name: String,
    pub last_contacted: String,
    pub notes: String,
}
