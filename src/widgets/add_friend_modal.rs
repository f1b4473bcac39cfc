use chrono::NaiveDate;
use dioxus::prelude::*;
use crate::api;
use crate::models::NewFriend;
use crate::theme::AppColors;
use crate::validate;
use crate::widgets::ModalDialog;

/// Form overlay for creating a friend. Validation (non-empty name, a
/// picked date) runs before any network call; on success the parent is
/// told to re-fetch and the form closes. A failed save logs, surfaces
/// the error and keeps the entered data.
#[component]
pub fn AddFriendModal(
    is_dark: bool,
    show: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let mut name = use_signal(String::new);
    // The native date input reports YYYY-MM-DD; converted to DD/MM/YYYY
    // only at submit time.
    let mut picked_date = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut notice = use_signal(|| Option::<String>::None);

    if !show {
        return rsx! {};
    }

    let surface = AppColors::surface(is_dark);
    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let outline = AppColors::OUTLINE;
    let field = format!(
        "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid {}; background: transparent; color: {}; box-sizing: border-box;",
        outline, on_surface
    );

    let save = move |_| {
        if saving() {
            return;
        }
        let date = NaiveDate::parse_from_str(&picked_date(), "%Y-%m-%d").ok();
        let date = match validate::validate_new_friend(&name(), date) {
            Ok(d) => d,
            Err(e) => {
                notice.set(Some(e.to_string()));
                return;
            }
        };
        let payload = NewFriend {
            name: name(),
            last_contacted: validate::format_contact_date(date),
            notes: notes(),
        };
        saving.set(true);
        spawn(async move {
            match api::create_friend(&payload).await {
                Ok(()) => {
                    name.set(String::new());
                    picked_date.set(String::new());
                    notes.set(String::new());
                    on_saved.call(());
                    on_close.call(());
                }
                Err(e) => {
                    log::error!("failed to add friend: {}", e);
                    notice.set(Some(format!("Could not add friend: {}", e)));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center; z-index: 50;",
            div {
                style: "background: {surface}; color: {on_surface}; border-radius: 12px; padding: 24px; width: 360px; box-shadow: 0 4px 24px rgba(0, 0, 0, 0.4);",
                h2 { style: "margin: 0 0 16px;", "Add a new friend" }
                div { style: "margin-bottom: 12px;",
                    input {
                        r#type: "text",
                        placeholder: "Name",
                        value: "{name()}",
                        oninput: move |ev| name.set(ev.value()),
                        style: "{field}",
                    }
                }
                div { style: "margin-bottom: 12px;",
                    input {
                        r#type: "date",
                        value: "{picked_date()}",
                        oninput: move |ev| picked_date.set(ev.value()),
                        style: "{field}",
                    }
                }
                div { style: "margin-bottom: 16px;",
                    textarea {
                        placeholder: "Notes",
                        value: "{notes()}",
                        oninput: move |ev| notes.set(ev.value()),
                        rows: "3",
                        style: "{field} resize: vertical;",
                    }
                }
                div { style: "display: flex; gap: 12px;",
                    button {
                        disabled: saving(),
                        onclick: save,
                        style: "flex: 1; padding: 12px; border-radius: 8px; background: {primary}; color: #00344F; font-weight: 600; border: none; cursor: pointer;",
                        if saving() { "Saving…" } else { "Save" }
                    }
                    button {
                        onclick: move |_| on_close.call(()),
                        style: "flex: 1; padding: 12px; border-radius: 8px; background: transparent; color: {on_surface}; border: 1px solid {outline}; cursor: pointer;",
                        "Close"
                    }
                }
            }
            if let Some(msg) = notice() {
                ModalDialog {
                    is_dark,
                    on_close: move |_| notice.set(None),
                    p { "{msg}" }
                }
            }
        }
    }
}
