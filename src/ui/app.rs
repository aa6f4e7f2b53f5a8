use dioxus::prelude::*;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::rc::Rc;

use crate::state::controller::Controller;
use crate::state::dataset::DatasetStore;
use crate::state::view_model::TableSpec;
use crate::ui::table::DataTable;

const STYLES: Asset = asset!("/assets/styles.css");

const DEFAULT_UNCERTAINTIES_PATH: &str = "uncertainties.csv";
const DEFAULT_REQUIREMENTS_PATH: &str = "relax_reqs.csv";

fn dataset_path(env_var: &str, default: &str) -> PathBuf {
    PathBuf::from(std::env::var(env_var).unwrap_or_else(|_| default.to_string()))
}

#[component]
pub fn App() -> Element {
    let controller = use_signal::<Option<Controller>>(|| None);
    let uncertainties = use_signal::<Option<TableSpec>>(|| None);
    let requirements = use_signal::<Option<TableSpec>>(|| None);
    let error_message = use_signal::<Option<String>>(|| None);

    // Both datasets load once, before any event is served. A load failure is
    // fatal to the page: the error banner replaces every panel.
    use_effect({
        let mut controller = controller;
        let mut uncertainties = uncertainties;
        let mut error_message = error_message;
        move || {
            let unc_path = dataset_path("SURE_UNCERTAINTIES", DEFAULT_UNCERTAINTIES_PATH);
            let req_path = dataset_path("SURE_REQUIREMENTS", DEFAULT_REQUIREMENTS_PATH);
            match DatasetStore::load(&unc_path, &req_path) {
                Ok(store) => {
                    let ctrl = Controller::new(Rc::new(store));
                    uncertainties.set(Some(ctrl.uncertainties_spec()));
                    controller.set(Some(ctrl));
                    error_message.set(None);
                }
                Err(e) => {
                    error_message.set(Some(e.to_string()));
                }
            }
        }
    });

    let error = error_message.read().clone();
    let uncertainties_spec = uncertainties.read().clone();
    let requirements_spec = requirements.read().clone();

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            h1 { class: "app-title", "Software Uncertainties Repository - SURE!" }
            if let Some(message) = error {
                p { class: "error-message", "{message}" }
            } else {
                div { class: "toggle-row",
                    button {
                        class: "toggle-btn",
                        onclick: {
                            let mut controller = controller;
                            let mut uncertainties = uncertainties;
                            move |_| {
                                controller.with_mut(|ctrl| {
                                    if let Some(ctrl) = ctrl {
                                        uncertainties.set(Some(ctrl.on_toggle_clicked()));
                                    }
                                });
                            }
                        },
                        "Toggle view"
                    }
                }
                if let Some(spec) = uncertainties_spec {
                    div { class: "panel",
                        h2 { class: "panel-title", "Uncertainties" }
                        DataTable {
                            spec,
                            selectable: true,
                            on_selection_change: {
                                let mut controller = controller;
                                let mut requirements = requirements;
                                move |ids: BTreeSet<String>| {
                                    controller.with_mut(|ctrl| {
                                        if let Some(ctrl) = ctrl {
                                            requirements.set(ctrl.on_selection_changed(ids));
                                        }
                                    });
                                }
                            },
                        }
                    }
                }
                if let Some(spec) = requirements_spec {
                    div { class: "panel",
                        h2 { class: "panel-title", "Requirements" }
                        DataTable { spec, selectable: false, on_selection_change: move |_| {} }
                    }
                }
            }
        }
    }
}
