use std::collections::BTreeSet;
use std::rc::Rc;

use sure::io::csv_io::CsvTable;
use sure::state::controller::Controller;
use sure::state::dataset::{Dataset, DatasetStore};
use sure::state::view_model::DisplayMode;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn ids(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn controller() -> Controller {
    let uncertainties = Dataset::keyed(
        CsvTable {
            headers: row(&["ID", "NAME"]),
            rows: vec![row(&["U1", "A"]), row(&["U2", "B"])],
        },
        "ID",
    )
    .unwrap();
    let requirements = Dataset::plain(CsvTable {
        headers: row(&["ID", "U_ID", "Requirement"]),
        rows: vec![
            row(&["R1", "U1", "First"]),
            row(&["R2", "U2", "Second"]),
            row(&["R3", "U1", "Third"]),
        ],
    });
    let store = DatasetStore::from_datasets(uncertainties, requirements).unwrap();
    Controller::new(Rc::new(store))
}

#[test]
fn test_initial_state_is_wrapped_with_empty_selection() {
    let ctrl = controller();
    assert_eq!(ctrl.toggle_clicks(), 0);
    assert_eq!(ctrl.display_mode(), DisplayMode::Wrapped);
    assert!(ctrl.selected_ids().is_empty());

    let spec = ctrl.uncertainties_spec();
    assert!(spec.tooltips.is_empty());
    assert_eq!(spec.rows.len(), 2);
}

#[test]
fn test_toggle_parity_drives_display_mode() {
    let mut ctrl = controller();

    let spec = ctrl.on_toggle_clicked();
    assert_eq!(ctrl.display_mode(), DisplayMode::Truncated);
    assert_eq!(spec.tooltips.len(), spec.rows.len());

    let spec = ctrl.on_toggle_clicked();
    assert_eq!(ctrl.display_mode(), DisplayMode::Wrapped);
    assert!(spec.tooltips.is_empty());

    let spec = ctrl.on_toggle_clicked();
    assert_eq!(ctrl.display_mode(), DisplayMode::Truncated);
    assert_eq!(spec.tooltips.len(), spec.rows.len());
}

#[test]
fn test_toggle_recomputes_from_source_data() {
    let mut ctrl = controller();
    let spec = ctrl.on_toggle_clicked();
    assert_eq!(spec.rows, ctrl.store().uncertainties().rows());
    assert_eq!(spec.key_column.as_deref(), Some("id"));
}

#[test]
fn test_selection_changed_publishes_filtered_panel() {
    let mut ctrl = controller();
    let spec = ctrl.on_selection_changed(ids(&["U1"])).unwrap();
    let kept: Vec<&str> = spec.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(kept, vec!["R1", "R3"]);
    assert_eq!(ctrl.selected_ids(), &ids(&["U1"]));
}

#[test]
fn test_selection_changed_empty_hides_panel() {
    let mut ctrl = controller();
    assert!(ctrl.on_selection_changed(ids(&["U1"])).is_some());
    assert!(ctrl.on_selection_changed(BTreeSet::new()).is_none());
    assert!(ctrl.selected_ids().is_empty());
}

#[test]
fn test_selection_of_unknown_ids_hides_panel() {
    // Ids absent from the uncertainties dataset are not an error; they just
    // match no requirement rows.
    let mut ctrl = controller();
    assert!(ctrl.on_selection_changed(ids(&["U9"])).is_none());
}

#[test]
fn test_selection_replaces_rather_than_merges() {
    let mut ctrl = controller();
    ctrl.on_selection_changed(ids(&["U1"]));
    let spec = ctrl.on_selection_changed(ids(&["U2"])).unwrap();
    let kept: Vec<&str> = spec.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(kept, vec!["R2"]);
}

#[test]
fn test_toggle_and_selection_are_orthogonal() {
    let mut ctrl = controller();

    ctrl.on_toggle_clicked();
    ctrl.on_selection_changed(ids(&["U1"]));
    assert_eq!(ctrl.display_mode(), DisplayMode::Truncated);

    ctrl.on_toggle_clicked();
    assert_eq!(ctrl.display_mode(), DisplayMode::Wrapped);
    assert_eq!(ctrl.selected_ids(), &ids(&["U1"]));

    // Re-firing the selection after toggles gives the same panel.
    let spec = ctrl.on_selection_changed(ids(&["U1"])).unwrap();
    let kept: Vec<&str> = spec.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(kept, vec!["R1", "R3"]);
}

#[test]
fn test_requirements_panel_renders_wrapped() {
    let mut ctrl = controller();
    ctrl.on_toggle_clicked();
    let spec = ctrl.on_selection_changed(ids(&["U1"])).unwrap();
    assert!(spec.style.wrap_text);
    assert!(spec.tooltips.is_empty());
}
