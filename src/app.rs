use dioxus::prelude::*;
use crate::api;
use crate::models::Friend;
use crate::theme::AppColors;
use crate::validate;
use crate::widgets::{
    AddFriendButton, AddFriendModal, FriendTable, ModalDialog, RandomFriendButton, SearchBar,
};

#[component]
pub fn App() -> Element {
    let is_dark = use_signal(|| true);
    let mut filter_text = use_signal(String::new);
    let mut show_add_modal = use_signal(|| false);
    let mut picked = use_signal(|| Option::<Friend>::None);
    let mut picking = use_signal(|| false);
    // Bumped by interactions outside the table so an in-progress row
    // edit commits before they take effect.
    let mut commit_requests = use_signal(|| 0u32);

    // Load the collection on mount. restart() is the re-fetch every
    // successful mutation triggers; the future is dropped with the
    // component, so a late response never lands on an unmounted view.
    // A failed load logs and leaves the table empty - no retry.
    let mut friends_resource = use_resource(|| async move {
        match api::fetch_friends().await {
            Ok(list) => list,
            Err(e) => {
                log::error!("failed to load friends: {}", e);
                Vec::new()
            }
        }
    });
    let friends = friends_resource().unwrap_or_default();

    let surface = AppColors::surface(is_dark());
    let on_surface = AppColors::on_surface(is_dark());

    let picked_dialog = match picked() {
        Some(f) => {
            let last = validate::normalize_contact_date(&f.last_contacted);
            rsx! {
                ModalDialog {
                    is_dark: is_dark(),
                    on_close: move |_| picked.set(None),
                    h2 { style: "margin: 0 0 8px;", "You should contact {f.name}" }
                    p { style: "margin: 0;", "Last contacted: {last}" }
                }
            }
        }
        None => rsx! {},
    };

    rsx! {
        div { style: "font-family: system-ui, sans-serif; min-height: 100vh; background: {surface}; color: {on_surface};",
            div { style: "max-width: 880px; margin: 0 auto; padding: 24px; display: flex; flex-direction: column;",
                h1 { style: "margin: 0 0 4px;", "Keep In Touch" }
                p { style: "opacity: 0.8; margin: 0 0 24px;", "Who have you not spoken to in a while?" }
                div { style: "display: flex; gap: 12px; margin-bottom: 16px; align-items: center;",
                    SearchBar {
                        is_dark: is_dark(),
                        filter_text: filter_text(),
                        on_filter_text_change: move |t| filter_text.set(t),
                        on_focus: move |_| commit_requests += 1,
                    }
                    RandomFriendButton {
                        is_dark: is_dark(),
                        disabled: picking(),
                        on_select: move |_| {
                            commit_requests += 1;
                            picking.set(true);
                            spawn(async move {
                                match api::fetch_random_friend().await {
                                    Ok(f) => picked.set(Some(f)),
                                    Err(e) => log::error!("failed to pick a random friend: {}", e),
                                }
                                picking.set(false);
                            });
                        },
                    }
                    AddFriendButton {
                        is_dark: is_dark(),
                        on_select: move |_| {
                            commit_requests += 1;
                            show_add_modal.set(true);
                        },
                    }
                }
                FriendTable {
                    is_dark: is_dark(),
                    friends: friends.clone(),
                    filter_text: filter_text(),
                    commit_requests,
                    on_saved: move |_| friends_resource.restart(),
                }
            }
            AddFriendModal {
                is_dark: is_dark(),
                show: show_add_modal(),
                on_close: move |_| show_add_modal.set(false),
                on_saved: move |_| friends_resource.restart(),
            }
            {picked_dialog}
        }
    }
}
