use std::collections::BTreeSet;

use crate::state::dataset::{Dataset, FOREIGN_KEY_COLUMN};

/// Requirement rows whose `U_ID` is a member of `selected_ids`, in the
/// dataset's original order (stable filter, no resort). An empty selection
/// yields an empty result — the requirements panel hides rather than showing
/// everything.
pub fn filter_requirements(requirements: &Dataset, selected_ids: &BTreeSet<String>) -> Dataset {
    if selected_ids.is_empty() {
        return requirements.with_rows(Vec::new());
    }

    let rows = requirements
        .rows()
        .iter()
        .filter(|row| {
            requirements
                .cell(row, FOREIGN_KEY_COLUMN)
                .is_some_and(|u_id| selected_ids.contains(u_id))
        })
        .cloned()
        .collect();

    requirements.with_rows(rows)
}
