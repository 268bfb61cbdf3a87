use std::collections::HashMap;

use dioxus::prelude::*;

use crate::app::layouts::keep_key_in_field;
use crate::app::pages::Route;
use crate::domain::models::{FieldType, SessionDefaultField};
use crate::server_fns::set_session_default_values;
use crate::shared::hooks::{use_notifications, use_toolbar, ToolbarDialog};
use crate::shared::logging::log_action_error;
use crate::toolbar::actions::{
    fill_missing_values, initial_values, session_defaults_outcome, AboutInfo,
    SESSION_DEFAULT_SETTINGS_FIELD,
};

/// Shortcut list shown by the shortcuts dialog
const SHORTCUTS: &[(&str, &str)] = &[
    ("Ctrl + G", "Open search"),
    ("?", "Show keyboard shortcuts"),
    ("Esc", "Close search"),
];

/// Renders whichever dialog the toolbar has open
#[component]
pub fn ToolbarDialogs() -> Element {
    let toolbar = use_toolbar();
    let dialog = toolbar.dialog.read().clone();

    let on_close = move |_: ()| toolbar.close_dialog();

    match dialog {
        Some(ToolbarDialog::About(info)) => rsx! { AboutDialog { info, on_close } },
        Some(ToolbarDialog::Shortcuts) => rsx! { ShortcutsDialog { on_close } },
        Some(ToolbarDialog::SessionDefaults(fields)) => rsx! {
            SessionDefaultsDialog { fields, on_close }
        },
        None => rsx! {},
    }
}

#[component]
fn DialogFrame(title: &'static str, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "c-modal",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "c-modal__dialog",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "c-modal__header",
                    h3 { class: "c-modal__title", "{title}" }
                    button {
                        class: "c-modal__close",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "c-modal__body", {children} }
            }
        }
    }
}

#[component]
fn AboutDialog(info: AboutInfo, on_close: EventHandler<()>) -> Element {
    rsx! {
        DialogFrame { title: "About", on_close,
            h4 { "Installed Apps" }
            ul { class: "c-about__apps",
                for app in info.apps.iter() {
                    li { key: "{app.name}",
                        strong { "{app.title}" }
                        span { class: "c-about__version", " v{app.version}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ShortcutsDialog(on_close: EventHandler<()>) -> Element {
    rsx! {
        DialogFrame { title: "Keyboard Shortcuts", on_close,
            table { class: "c-shortcuts",
                for (keys, description) in SHORTCUTS.iter() {
                    tr { key: "{keys}",
                        td { kbd { "{keys}" } }
                        td { "{description}" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SessionDefaultsDialogProps {
    pub fields: Vec<SessionDefaultField>,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn SessionDefaultsDialog(props: SessionDefaultsDialogProps) -> Element {
    let toolbar = use_toolbar();
    let notifications = use_notifications();

    let fields = props.fields.clone();
    let values = use_signal(|| initial_values(&fields));
    let mut saving = use_signal(|| false);

    let on_close = props.on_close;
    let save_fields = props.fields.clone();
    let save = move |_| {
        let payload: HashMap<String, String> = fill_missing_values(&save_fields, values());
        let field_count = payload.len();
        saving.set(true);

        spawn(async move {
            match set_session_default_values(payload).await {
                Ok(message) => {
                    let (notification, clear_cache) = session_defaults_outcome(&message, field_count);
                    notifications.show_alert(notification.message, notification.indicator);
                    if clear_cache {
                        toolbar.clear_cache(notifications);
                    }
                }
                Err(e) => log_action_error("session_defaults", &e.to_string()),
            }
            saving.set(false);
            on_close.call(());
        });
    };

    rsx! {
        DialogFrame { title: "Session Defaults", on_close,
            form { class: "c-session-defaults",
                onsubmit: move |evt| evt.prevent_default(),
                for field in props.fields.iter() {
                    SessionDefaultInput {
                        key: "{field.fieldname}",
                        field: field.clone(),
                        values,
                        on_close,
                    }
                }

                button {
                    r#type: "button",
                    class: "c-btn c-btn--primary c-btn--sm",
                    disabled: saving(),
                    onclick: save,
                    if saving() { "Saving..." } else { "Save" }
                }
            }
        }
    }
}

#[component]
fn SessionDefaultInput(
    field: SessionDefaultField,
    values: Signal<HashMap<String, String>>,
    on_close: EventHandler<()>,
) -> Element {
    let nav = navigator();

    let input = match field.fieldtype {
        FieldType::Button => {
            let label = field.label.clone();
            let opens_settings = field.fieldname == SESSION_DEFAULT_SETTINGS_FIELD;
            rsx! {
                button {
                    r#type: "button",
                    class: "c-btn c-btn--secondary c-btn--sm",
                    onclick: move |_| {
                        if opens_settings {
                            nav.push(Route::Form {
                                doctype: "session-default-settings".to_string(),
                                name: "Session Default Settings".to_string(),
                            });
                        }
                        on_close.call(());
                    },
                    "{label}"
                }
            }
        }
        FieldType::Select => rsx! { SelectField { field, values } },
        FieldType::Link | FieldType::Data => rsx! { TextField { field, values } },
    };

    rsx! {
        div { class: "c-session-defaults__field", {input} }
    }
}

#[component]
fn TextField(field: SessionDefaultField, values: Signal<HashMap<String, String>>) -> Element {
    let name = field.fieldname.clone();
    let current = values.read().get(&field.fieldname).cloned().unwrap_or_default();

    rsx! {
        label { r#for: "{field.fieldname}", "{field.label}" }
        input {
            id: "{field.fieldname}",
            r#type: "text",
            value: "{current}",
            oninput: move |evt| {
                values.write().insert(name.clone(), evt.value());
            },
            onkeydown: move |evt| keep_key_in_field(&evt),
        }
    }
}

#[component]
fn SelectField(field: SessionDefaultField, values: Signal<HashMap<String, String>>) -> Element {
    let name = field.fieldname.clone();
    let current = values.read().get(&field.fieldname).cloned().unwrap_or_default();

    rsx! {
        label { r#for: "{field.fieldname}", "{field.label}" }
        select {
            id: "{field.fieldname}",
            value: "{current}",
            onchange: move |evt| {
                values.write().insert(name.clone(), evt.value());
            },
            onkeydown: move |evt| keep_key_in_field(&evt),
            option { value: "", "" }
            for choice in field.select_options() {
                option {
                    key: "{choice}",
                    value: "{choice}",
                    selected: choice == current,
                    "{choice}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::layouts::{shortcut_for, Shortcut};
    use crate::toolbar::ToolbarAction;

    #[test]
    fn test_shortcut_list_shows_the_key_that_opens_it() {
        let (keys, _) = SHORTCUTS
            .iter()
            .find(|(_, description)| *description == "Show keyboard shortcuts")
            .unwrap();
        assert_eq!(
            shortcut_for(keys, false),
            Some(Shortcut::Action(ToolbarAction::ShowShortcuts))
        );
    }
}
