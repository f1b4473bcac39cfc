use dioxus::prelude::*;
use crate::api;
use crate::filter;
use crate::models::Friend;
use crate::theme::AppColors;
use crate::validate;
use crate::widgets::ModalDialog;

/// In-progress field values for the row currently in edit mode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowDraft {
    pub name: String,
    pub last_contacted: String,
    pub notes: String,
}

impl RowDraft {
    pub fn from_friend(f: &Friend) -> Self {
        Self {
            name: f.name.clone(),
            // Editing always starts from the DD/MM/YYYY form so a commit
            // of an untouched date still passes validation.
            last_contacted: validate::normalize_contact_date(&f.last_contacted),
            notes: f.notes.clone(),
        }
    }
}

/// A failed save must land back in edit mode. True when edit mode is no
/// longer on the record that failed - the user moved on to another row
/// while the save was in flight - so `editing` and `draft` have to be
/// restored to the failed record before the error is surfaced.
pub fn needs_restore(editing: Option<&Friend>, failed_id: &str) -> bool {
    editing.map(|f| f.id != failed_id).unwrap_or(true)
}

/// Commit the active edit: validate the draft date, then PUT the full
/// record and re-fetch on success. Returns true when the caller may move
/// edit mode elsewhere (nothing was editing, or validation passed and
/// the save was dispatched). A failed save lands back in edit mode with
/// the attempted values and surfaces the error; it is recoverable,
/// never fatal, and never discarded.
fn commit_edit(
    mut editing: Signal<Option<Friend>>,
    mut draft: Signal<RowDraft>,
    mut saving: Signal<bool>,
    mut notice: Signal<Option<String>>,
    on_saved: EventHandler<()>,
) -> bool {
    let current = match editing() {
        Some(f) => f,
        None => return true,
    };
    if saving() {
        return false;
    }
    let d = draft();
    if let Err(e) = validate::validate_row_edit(&d.last_contacted) {
        notice.set(Some(e.to_string()));
        return false;
    }
    let updated = Friend {
        id: current.id,
        name: d.name,
        last_contacted: d.last_contacted,
        notes: d.notes,
    };
    saving.set(true);
    spawn(async move {
        match api::update_friend(&updated).await {
            Ok(()) => {
                // Leave edit mode unless the user already moved on to
                // another row while the save was in flight.
                let still_here = !needs_restore(editing.read().as_ref(), &updated.id);
                if still_here {
                    editing.set(None);
                }
                on_saved.call(());
            }
            Err(e) => {
                log::error!("failed to save friend {}: {}", updated.id, e);
                notice.set(Some(format!("Could not save changes: {}", e)));
                // If the user switched rows before this save resolved,
                // pull the failed edit back so the attempted values are
                // still there to fix and retry.
                let moved_on = needs_restore(editing.read().as_ref(), &updated.id);
                if moved_on {
                    draft.set(RowDraft::from_friend(&updated));
                    editing.set(Some(updated));
                }
            }
        }
        saving.set(false);
    });
    true
}

/// The friends table. Owns which row (if any) is in edit mode - at most
/// one, by construction. Its container is also the click-away boundary:
/// row clicks stop propagation, so any click that reaches the container
/// landed outside every row and commits the active edit.
#[component]
pub fn FriendTable(
    is_dark: bool,
    friends: Vec<Friend>,
    filter_text: String,
    commit_requests: Signal<u32>,
    on_saved: EventHandler<()>,
) -> Element {
    let editing = use_signal(|| Option::<Friend>::None);
    let draft = use_signal(RowDraft::default);
    let saving = use_signal(|| false);
    let mut notice = use_signal(|| Option::<String>::None);

    // Interactions outside the table (search focus, opening the add
    // form, the random pick) bump the counter; any active edit commits
    // before they take effect. peek() keeps entering edit mode itself
    // from re-running this.
    use_effect(move || {
        let _ = commit_requests();
        if editing.peek().is_some() {
            commit_edit(editing, draft, saving, notice, on_saved);
        }
    });

    let visible = filter::filter_friends(&friends, &filter_text);
    let count = visible.len();
    let on_surface = AppColors::on_surface(is_dark);
    let outline = AppColors::OUTLINE;

    rsx! {
        div {
            style: "flex: 1; min-height: 60vh;",
            onclick: move |_| {
                if editing.read().is_some() {
                    commit_edit(editing, draft, saving, notice, on_saved);
                }
            },
            p { style: "opacity: 0.7; font-size: 0.875rem; margin-bottom: 8px;",
                if count == 1 { "1 friend shown" } else { "{count} friends shown" }
            }
            table { style: "width: 100%; border-collapse: collapse; color: {on_surface};",
                thead {
                    tr {
                        th { style: "text-align: left; padding: 8px; border-bottom: 2px solid {outline};", "ID" }
                        th { style: "text-align: left; padding: 8px; border-bottom: 2px solid {outline};", "Name" }
                        th { style: "text-align: left; padding: 8px; border-bottom: 2px solid {outline};", "Last Contacted" }
                        th { style: "text-align: left; padding: 8px; border-bottom: 2px solid {outline};", "Notes" }
                    }
                }
                tbody {
                    for friend in visible {
                        FriendRow {
                            key: "{friend.id}",
                            is_dark,
                            friend,
                            editing,
                            draft,
                            saving,
                            notice,
                            on_saved: move |_| on_saved.call(()),
                        }
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

/// One table row. Edit mode is parent-owned; the row only renders either
/// its display cells or the draft inputs. The ID cell is plain text in
/// both modes.
#[component]
fn FriendRow(
    is_dark: bool,
    friend: Friend,
    mut editing: Signal<Option<Friend>>,
    mut draft: Signal<RowDraft>,
    saving: Signal<bool>,
    notice: Signal<Option<String>>,
    on_saved: EventHandler<()>,
) -> Element {
    let is_editing = editing
        .read()
        .as_ref()
        .map(|f| f.id == friend.id)
        .unwrap_or(false);

    let outline = AppColors::OUTLINE;
    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let cell = format!("padding: 8px; border-bottom: 1px solid {};", outline);
    let field = format!(
        "width: 100%; padding: 6px; border-radius: 6px; border: 1px solid {}; background: transparent; color: {}; box-sizing: border-box;",
        primary, on_surface
    );

    let row = friend.clone();
    let mut activate = move |ev: Event<MouseData>| {
        ev.stop_propagation();
        let already = editing
            .read()
            .as_ref()
            .map(|f| f.id == row.id)
            .unwrap_or(false);
        if already {
            return;
        }
        // Entering edit on a new row first commits the one that was
        // editing; the switch only happens when that commit goes through.
        let occupied = editing.read().is_some();
        if !occupied || commit_edit(editing, draft, saving, notice, on_saved) {
            draft.set(RowDraft::from_friend(&row));
            editing.set(Some(row.clone()));
        }
    };

    let on_key = move |ev: Event<KeyboardData>| {
        if ev.key() == Key::Enter {
            commit_edit(editing, draft, saving, notice, on_saved);
        }
    };

    let last_contacted = validate::normalize_contact_date(&friend.last_contacted);
    let d = draft();

    rsx! {
        tr {
            onclick: move |ev| activate(ev),
            td { style: "{cell} opacity: 0.6;", "{friend.id}" }
            if is_editing {
                td { style: "{cell}",
                    input {
                        value: "{d.name}",
                        oninput: move |ev| draft.with_mut(|d| d.name = ev.value()),
                        onkeydown: on_key,
                        style: "{field}",
                    }
                }
                td { style: "{cell}",
                    input {
                        placeholder: "DD/MM/YYYY",
                        value: "{d.last_contacted}",
                        oninput: move |ev| draft.with_mut(|d| d.last_contacted = ev.value()),
                        onkeydown: on_key,
                        style: "{field}",
                    }
                }
                td { style: "{cell}",
                    input {
                        value: "{d.notes}",
                        oninput: move |ev| draft.with_mut(|d| d.notes = ev.value()),
                        onkeydown: on_key,
                        style: "{field}",
                    }
                }
            } else {
                td { style: "{cell}", "{friend.name}" }
                td { style: "{cell}", "{last_contacted}" }
                td { style: "{cell}", "{friend.notes}" }
            }
        }
    }
}
