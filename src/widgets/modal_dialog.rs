use dioxus::prelude::*;
use crate::theme::AppColors;

/// Blocking overlay used for validation messages and the random-pick
/// result. Only the Close button dismisses it.
#[component]
pub fn ModalDialog(is_dark: bool, on_close: EventHandler<()>, children: Element) -> Element {
    let surface = AppColors::surface(is_dark);
    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center; z-index: 100;",
            // The overlay swallows clicks so nothing behind it (e.g. the
            // table's click-away boundary) reacts while it is open.
            onclick: move |ev| ev.stop_propagation(),
            div {
                style: "background: {surface}; color: {on_surface}; border-radius: 12px; padding: 24px; min-width: 280px; max-width: 420px; box-shadow: 0 4px 24px rgba(0, 0, 0, 0.4);",
                {children}
                button {
                    onclick: move |_| on_close.call(()),
                    style: "margin-top: 16px; padding: 8px 16px; border-radius: 8px; background: {primary}; color: #00344F; font-weight: 600; border: none; cursor: pointer;",
                    "Close"
                }
            }
        }
    }
}
