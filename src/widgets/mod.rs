mod add_friend_button;
mod add_friend_modal;
mod friend_table;
mod modal_dialog;
mod random_friend_button;
mod search_bar;

pub use add_friend_button::AddFriendButton;
pub use add_friend_modal::AddFriendModal;
pub use friend_table::{needs_restore, FriendTable, RowDraft};
pub use modal_dialog::ModalDialog;
pub use random_friend_button::RandomFriendButton;
pub use search_bar::SearchBar;
