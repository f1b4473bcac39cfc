mod friend;

pub use friend::{Friend, NewFriend};
