use dioxus::prelude::*;
use crate::theme::AppColors;

/// Asks the service to pick one friend to contact. Disabled while a
/// pick is in flight so a double click cannot race two requests.
#[component]
pub fn RandomFriendButton(
    is_dark: bool,
    disabled: bool,
    on_select: EventHandler<()>,
) -> Element {
    let primary = AppColors::primary(is_dark);

    rsx! {
        button {
            disabled,
            onclick: move |_| on_select.call(()),
            style: "padding: 12px 16px; border-radius: 8px; background: {primary}; color: #00344F; font-weight: 600; border: none; cursor: pointer; white-space: nowrap;",
            if disabled { "Picking…" } else { "Pick a friend to contact" }
        }
    }
}
