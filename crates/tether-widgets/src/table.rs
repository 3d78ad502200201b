#![forbid(unsafe_code)]

//! Column layout shared by the list widgets.

use tether_runtime::rows::{SortColumn, SortDirection};

use crate::text::{display_width, pad_right};

pub(crate) const COLUMNS: usize = 3;
const GAP: &str = "  ";

/// Header titles, with an arrow on the sorted column.
pub(crate) fn header(indicator: Option<(SortColumn, SortDirection)>) -> [String; COLUMNS] {
    SortColumn::ALL.map(|col| match indicator {
        Some((sorted, dir)) if sorted == col => format!("{} {}", col.title(), dir.arrow()),
        _ => col.title().to_string(),
    })
}

/// Lay out a header and rows; `true` in a row marks it selected.
pub(crate) fn render(header: &[String; COLUMNS], rows: &[(bool, [String; COLUMNS])]) -> String {
    let mut widths = header.clone().map(|h| display_width(&h));
    for (_, cells) in rows {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(display_width(cell));
        }
    }

    let line = |marker: &str, cells: &[String; COLUMNS]| {
        let joined = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| pad_right(cell, w))
            .collect::<Vec<_>>()
            .join(GAP);
        format!("{marker}{joined}").trim_end().to_string()
    };

    let mut out = vec![line("  ", header)];
    out.extend(
        rows.iter()
            .map(|(selected, cells)| line(if *selected { "> " } else { "  " }, cells)),
    );
    out.join("\n")
}
