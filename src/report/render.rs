/// Fixed-width bordered table rendering for the ranked report.
use super::extract::HeaderPair;
use crate::types::RankedRow;

/// Cell alignment within a padded column.
#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

/// Render ranked rows as a bordered text table.
///
/// Layout: an unlabeled index column showing the rank, then the two header
/// labels. Column widths auto-size to the widest cell (header included)
/// with one space of padding on each side. The index and value columns are
/// right-aligned; since means always carry exactly 2 fractional digits,
/// right alignment lines the values up on the decimal point. The key
/// column is left-aligned. The returned string has no trailing newline.
#[must_use]
pub fn render(rows: &[RankedRow], header: &HeaderPair) -> String {
    let labels = [String::new(), header.key_label.clone(), header.value_label.clone()];
    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|r| [r.rank.to_string(), r.key.clone(), format!("{:.2}", r.mean)])
        .collect();

    // Width in characters, not bytes, so multibyte names keep the
    // borders aligned (format! pads by character count as well).
    let mut widths = [0usize; 3];
    for row in std::iter::once(&labels).chain(&cells) {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let aligns = [Align::Right, Align::Left, Align::Right];
    let border = border_line(&widths);

    let mut lines = Vec::with_capacity(cells.len() + 4);
    lines.push(border.clone());
    lines.push(format_row(&labels, &widths, &aligns));
    lines.push(border.clone());
    for row in &cells {
        lines.push(format_row(row, &widths, &aligns));
    }
    lines.push(border);
    lines.join("\n")
}

fn border_line(widths: &[usize; 3]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

fn format_row(cells: &[String; 3], widths: &[usize; 3], aligns: &[Align; 3]) -> String {
    let mut line = String::from("|");
    for ((cell, &w), align) in cells.iter().zip(widths).zip(aligns) {
        match align {
            Align::Left => line.push_str(&format!(" {cell:<w$} |")),
            Align::Right => line.push_str(&format!(" {cell:>w$} |")),
        }
    }
    line
}
