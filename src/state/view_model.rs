use serde::Serialize;

use crate::state::dataset::Dataset;

/// Cells are clamped to this width in both display modes.
pub const MAX_CELL_WIDTH_PX: u32 = 450;

pub const LINE_HEIGHT_PX: u32 = 15;
pub const WRAPPED_PADDING_PX: u32 = 5;
pub const TRUNCATED_PADDING_PX: u32 = 10;

/// Header row plus this many leading columns stay visible under scroll.
pub const PINNED_COLUMNS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Cell text wraps to multiple lines; no tooltips.
    Wrapped,
    /// Cell text is clipped with an ellipsis; every cell carries a tooltip
    /// holding its full value.
    Truncated,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColumnSpec {
    pub name: String,
    pub id: String,
    pub selectable: bool,
    /// Fixed width hint for known columns; `None` means the render host's
    /// default width policy.
    pub width_px: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewStyle {
    pub wrap_text: bool,
    pub ellipsis: bool,
    pub max_cell_width_px: u32,
    pub cell_padding_px: u32,
    pub line_height_px: u32,
    pub pinned_columns: usize,
    pub pinned_header: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tooltip {
    pub value: String,
    /// Tooltip text is rendered as markdown-capable rich text.
    pub markdown: bool,
}

/// Declarative description of one table, ready for a render host: columns in
/// header order, rows in dataset order, style hints, and (in truncated mode)
/// one tooltip per cell. Sorting, filtering, and row selection are the render
/// host's job; rows here are never pre-sorted or pre-filtered.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableSpec {
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<Vec<String>>,
    /// Column whose values identify rows in selection reports, when the
    /// underlying dataset is keyed.
    pub key_column: Option<String>,
    pub style: ViewStyle,
    /// Empty in `Wrapped` mode; one entry per cell per row in `Truncated`.
    pub tooltips: Vec<Vec<Tooltip>>,
}

fn width_hint(column: &str) -> Option<u32> {
    match column {
        "id" => Some(25),
        "ID" => Some(50),
        "U_ID" => Some(70),
        "NAME" | "CLASSIFICATION" | "Requirement" => Some(150),
        _ => None,
    }
}

fn view_style(mode: DisplayMode) -> ViewStyle {
    let wrapped = matches!(mode, DisplayMode::Wrapped);
    ViewStyle {
        wrap_text: wrapped,
        ellipsis: !wrapped,
        max_cell_width_px: MAX_CELL_WIDTH_PX,
        cell_padding_px: if wrapped {
            WRAPPED_PADDING_PX
        } else {
            TRUNCATED_PADDING_PX
        },
        line_height_px: LINE_HEIGHT_PX,
        pinned_columns: PINNED_COLUMNS,
        pinned_header: true,
    }
}

/// Derives the table description for `dataset` in the given display mode.
/// Pure and deterministic: the same dataset and mode always produce the same
/// spec.
pub fn render(dataset: &Dataset, mode: DisplayMode) -> TableSpec {
    let columns = dataset
        .columns()
        .iter()
        .map(|name| ColumnSpec {
            name: name.clone(),
            id: name.clone(),
            selectable: true,
            width_px: width_hint(name),
        })
        .collect();

    let tooltips = match mode {
        DisplayMode::Wrapped => Vec::new(),
        DisplayMode::Truncated => dataset
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|value| Tooltip {
                        value: value.clone(),
                        markdown: true,
                    })
                    .collect()
            })
            .collect(),
    };

    TableSpec {
        columns,
        rows: dataset.rows().to_vec(),
        key_column: dataset.key_column().map(str::to_string),
        style: view_style(mode),
        tooltips,
    }
}
