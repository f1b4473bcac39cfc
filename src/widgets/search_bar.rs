use dioxus::prelude::*;
use crate::theme::AppColors;

/// Controlled search input; reports every keystroke upward, and focus
/// gain so the app can commit an in-progress row edit first.
#[component]
pub fn SearchBar(
    is_dark: bool,
    filter_text: String,
    on_filter_text_change: EventHandler<String>,
    on_focus: EventHandler<()>,
) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let outline = AppColors::OUTLINE;

    rsx! {
        form {
            style: "flex: 1;",
            onsubmit: move |ev| ev.prevent_default(),
            input {
                r#type: "text",
                placeholder: "Search...",
                value: "{filter_text}",
                oninput: move |ev| on_filter_text_change.call(ev.value()),
                onfocus: move |_| on_focus.call(()),
                style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid {outline}; background: transparent; color: {on_surface}; box-sizing: border-box;",
            }
        }
    }
}
