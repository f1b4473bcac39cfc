use dioxus::prelude::*;
use crate::theme::AppColors;

#[component]
pub fn AddFriendButton(is_dark: bool, on_select: EventHandler<()>) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let outline = AppColors::OUTLINE;

    rsx! {
        button {
            onclick: move |_| on_select.call(()),
            style: "padding: 12px 16px; border-radius: 8px; background: transparent; color: {on_surface}; border: 1px solid {outline}; cursor: pointer; white-space: nowrap;",
            "Add Friend"
        }
    }
}
