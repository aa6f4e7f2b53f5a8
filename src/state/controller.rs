use std::collections::BTreeSet;
use std::rc::Rc;

use crate::state::dataset::DatasetStore;
use crate::state::selection;
use crate::state::view_model::{self, DisplayMode, TableSpec};

/// The only stateful piece of the core: a monotonically increasing toggle
/// click counter and the set of selected uncertainty ids. Every event fully
/// recomputes its table spec from the shared read-only store; the two events
/// never affect each other's derived state.
#[derive(Clone, Debug, PartialEq)]
pub struct Controller {
    store: Rc<DatasetStore>,
    toggle_clicks: u64,
    selected_ids: BTreeSet<String>,
}

impl Controller {
    pub fn new(store: Rc<DatasetStore>) -> Self {
        Self {
            store,
            toggle_clicks: 0,
            selected_ids: BTreeSet::new(),
        }
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn toggle_clicks(&self) -> u64 {
        self.toggle_clicks
    }

    pub fn selected_ids(&self) -> &BTreeSet<String> {
        &self.selected_ids
    }

    /// Even click counts render wrapped, odd render truncated. Zero clicks
    /// therefore matches the initial wrapped render.
    pub fn display_mode(&self) -> DisplayMode {
        if self.toggle_clicks % 2 == 0 {
            DisplayMode::Wrapped
        } else {
            DisplayMode::Truncated
        }
    }

    /// The uncertainties table under the current display mode. Published once
    /// at load and again after every toggle click.
    pub fn uncertainties_spec(&self) -> TableSpec {
        view_model::render(self.store.uncertainties(), self.display_mode())
    }

    pub fn on_toggle_clicked(&mut self) -> TableSpec {
        self.toggle_clicks += 1;
        self.uncertainties_spec()
    }

    /// Replaces the selection and re-derives the requirements panel. `Some`
    /// carries the filtered table; `None` means the panel is hidden. Ids not
    /// present in the uncertainties dataset simply match no requirement rows.
    pub fn on_selection_changed(&mut self, selected_ids: BTreeSet<String>) -> Option<TableSpec> {
        self.selected_ids = selected_ids;
        let filtered = selection::filter_requirements(self.store.requirements(), &self.selected_ids);
        if filtered.is_empty() {
            None
        } else {
            Some(view_model::render(&filtered, DisplayMode::Wrapped))
        }
    }
}
