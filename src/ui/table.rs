use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::state::view_model::{ColumnSpec, TableSpec, Tooltip, ViewStyle};

#[derive(Clone, Debug, PartialEq, Eq)]
enum SortOrder {
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct SortSpec {
    column: usize,
    order: SortOrder,
}

/// Renders a `TableSpec`. Sorting, free-text filtering, and row selection are
/// host-local per the view-model contract: they live in this component's
/// signals and never touch the spec itself. Selection is reported upward as
/// the set of key-column values.
#[component]
pub fn DataTable(
    spec: TableSpec,
    selectable: bool,
    on_selection_change: EventHandler<BTreeSet<String>>,
) -> Element {
    let mut sort = use_signal::<Option<SortSpec>>(|| None);
    let mut filter_query = use_signal(String::new);
    let selected = use_signal(BTreeSet::<String>::new);

    if spec.columns.is_empty() {
        return rsx! {
            p { class: "empty-message", "No columns in this dataset." }
        };
    }

    let key_index = spec
        .key_column
        .as_ref()
        .and_then(|key| spec.columns.iter().position(|c| &c.id == key));
    let query = filter_query.read().clone();
    let sort_spec = sort.read().clone();
    let visible = visible_row_indices(&spec.rows, &query, sort_spec.as_ref());

    rsx! {
        input {
            class: "table-filter",
            placeholder: "Filter rows",
            value: "{query}",
            oninput: move |evt| filter_query.set(evt.value()),
        }
        div { class: "table-container",
            table { class: "data-table",
                thead {
                    tr { class: if spec.style.pinned_header { "pinned-header" } else { "" },
                        if selectable {
                            th { class: "select-col" }
                        }
                        for (col_idx, col) in spec.columns.iter().enumerate() {
                            th {
                                class: header_class(col_idx, &sort_spec, &spec.style),
                                style: header_style(col_idx, &spec.columns, &spec.style, selectable),
                                onclick: move |_| {
                                    let next = {
                                        let current = sort.read();
                                        match current.as_ref() {
                                            Some(s) if s.column == col_idx => SortSpec {
                                                column: col_idx,
                                                order: toggle_sort_order(&s.order),
                                            },
                                            _ => SortSpec {
                                                column: col_idx,
                                                order: SortOrder::Asc,
                                            },
                                        }
                                    };
                                    sort.set(Some(next));
                                },
                                "{col.name}"
                            }
                        }
                    }
                }
                tbody {
                    for (display_index, data_index) in visible.iter().enumerate() {
                        if let Some(row) = spec.rows.get(*data_index) {
                            TableRow {
                                display_index,
                                row: row.clone(),
                                tooltips: spec.tooltips.get(*data_index).cloned(),
                                columns: spec.columns.clone(),
                                style: spec.style.clone(),
                                selectable,
                                key_index,
                                selected,
                                on_selection_change,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TableRow(
    display_index: usize,
    row: Vec<String>,
    tooltips: Option<Vec<Tooltip>>,
    columns: Vec<ColumnSpec>,
    style: ViewStyle,
    selectable: bool,
    key_index: Option<usize>,
    selected: Signal<BTreeSet<String>>,
    on_selection_change: EventHandler<BTreeSet<String>>,
) -> Element {
    let row_id = key_index.and_then(|pos| row.get(pos)).cloned();
    let is_selected = row_id
        .as_ref()
        .map(|id| selected.read().contains(id))
        .unwrap_or(false);
    let mut row_class = if display_index % 2 == 0 { "even" } else { "odd" }.to_string();
    if is_selected {
        row_class.push_str(" selected-row");
    }

    rsx! {
        tr { class: "{row_class}",
            if selectable {
                td { class: "select-col",
                    input {
                        r#type: "checkbox",
                        checked: is_selected,
                        onchange: {
                            let row_id = row_id.clone();
                            let mut selected = selected;
                            move |evt: FormEvent| {
                                let Some(id) = row_id.clone() else {
                                    return;
                                };
                                selected.with_mut(|set| {
                                    if evt.checked() {
                                        set.insert(id);
                                    } else {
                                        set.remove(&id);
                                    }
                                });
                                on_selection_change.call(selected.read().clone());
                            }
                        },
                    }
                }
            }
            for (col_idx, cell) in row.iter().enumerate() {
                td {
                    class: cell_class(col_idx, &style),
                    style: cell_style(col_idx, &columns, &style, selectable),
                    title: tooltip_title(&tooltips, col_idx),
                    "{cell}"
                }
            }
        }
    }
}

fn tooltip_title(tooltips: &Option<Vec<Tooltip>>, col_idx: usize) -> String {
    tooltips
        .as_ref()
        .and_then(|cells| cells.get(col_idx))
        .map(|tip| tip.value.clone())
        .unwrap_or_default()
}

fn toggle_sort_order(order: &SortOrder) -> SortOrder {
    match order {
        SortOrder::Asc => SortOrder::Desc,
        SortOrder::Desc => SortOrder::Asc,
    }
}

/// Filtered and sorted view over the spec's rows, as indices into the
/// original order. Filtering matches any cell, case-insensitively; sorting is
/// a stable string sort, reversed for descending. The spec rows themselves
/// are never reordered.
fn visible_row_indices(rows: &[Vec<String>], query: &str, sort: Option<&SortSpec>) -> Vec<usize> {
    let needle = query.trim().to_ascii_lowercase();
    let mut visible: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            needle.is_empty()
                || row
                    .iter()
                    .any(|cell| cell.to_ascii_lowercase().contains(&needle))
        })
        .map(|(idx, _)| idx)
        .collect();

    if let Some(sort) = sort {
        visible.sort_by(|a, b| {
            let left = rows[*a].get(sort.column).map(|c| c.to_ascii_lowercase());
            let right = rows[*b].get(sort.column).map(|c| c.to_ascii_lowercase());
            left.cmp(&right)
        });
        if matches!(sort.order, SortOrder::Desc) {
            visible.reverse();
        }
    }

    visible
}

fn header_class(col_idx: usize, sort: &Option<SortSpec>, style: &ViewStyle) -> String {
    let mut classes = String::new();
    if col_idx < style.pinned_columns {
        classes.push_str("pinned-col");
    }
    if let Some(sort) = sort.as_ref() {
        if sort.column == col_idx {
            if !classes.is_empty() {
                classes.push(' ');
            }
            classes.push_str(match sort.order {
                SortOrder::Asc => "sorted-asc",
                SortOrder::Desc => "sorted-desc",
            });
        }
    }
    classes
}

fn cell_class(col_idx: usize, style: &ViewStyle) -> String {
    let mode = if style.wrap_text { "wrap" } else { "truncate" };
    if col_idx < style.pinned_columns {
        format!("cell {mode} pinned-col")
    } else {
        format!("cell {mode}")
    }
}

const DEFAULT_COLUMN_WIDTH_PX: u32 = 150;
const SELECT_COLUMN_WIDTH_PX: u32 = 30;

/// Left offset of a pinned column: the widths of everything pinned before it.
fn pinned_left_px(col_idx: usize, columns: &[ColumnSpec], selectable: bool) -> u32 {
    let mut left = if selectable { SELECT_COLUMN_WIDTH_PX } else { 0 };
    for col in columns.iter().take(col_idx) {
        left += col.width_px.unwrap_or(DEFAULT_COLUMN_WIDTH_PX);
    }
    left
}

fn header_style(
    col_idx: usize,
    columns: &[ColumnSpec],
    style: &ViewStyle,
    selectable: bool,
) -> String {
    let mut out = String::new();
    if let Some(width) = columns.get(col_idx).and_then(|c| c.width_px) {
        out.push_str(&format!("width: {width}px; min-width: {width}px; "));
    }
    if col_idx < style.pinned_columns {
        out.push_str(&format!(
            "left: {}px; ",
            pinned_left_px(col_idx, columns, selectable)
        ));
    }
    out
}

fn cell_style(
    col_idx: usize,
    columns: &[ColumnSpec],
    style: &ViewStyle,
    selectable: bool,
) -> String {
    let mut out = format!(
        "max-width: {}px; padding: {}px; line-height: {}px; ",
        style.max_cell_width_px, style.cell_padding_px, style.line_height_px
    );
    if let Some(width) = columns.get(col_idx).and_then(|c| c.width_px) {
        out.push_str(&format!("width: {width}px; min-width: {width}px; "));
    }
    if col_idx < style.pinned_columns {
        out.push_str(&format!(
            "left: {}px; ",
            pinned_left_px(col_idx, columns, selectable)
        ));
    }
    out
}
