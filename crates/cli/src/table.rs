//! Text rendering of the form for the terminal.

use crate::form::{AdmissionRow, FormState, Notice};

pub const TITLE: &str = "Admissions for Specific Patient";

const HEADERS: [&str; 3] = ["Admission ID", "Admission Date", "Discharge Date"];

/// Shown in place of data until the first successful lookup.
const HINT_ROW: [&str; 3] = [
    "Unique ID for the system",
    "YYYY-MM-DD 'T' TIME",
    "YYYY-MM-DD 'T' TIME",
];

/// Renders the "Current Patient ID" label followed by the admissions table.
pub fn render_form(state: &FormState) -> String {
    match state {
        FormState::Idle => {
            let rows = vec![HINT_ROW.map(String::from)];
            format!("Current Patient ID: \n{}", render_table(&rows))
        }
        FormState::Populated { patient_id, rows } => {
            let cells: Vec<[String; 3]> = rows.iter().map(cells).collect();
            format!("Current Patient ID: {patient_id}\n{}", render_table(&cells))
        }
    }
}

/// Renders a modal as a bracketed title over its message.
pub fn render_notice(notice: &Notice) -> String {
    format!("[{}]\n{}", notice.title(), notice)
}

fn cells(row: &AdmissionRow) -> [String; 3] {
    [
        row.admission_id.clone(),
        row.admission_date.clone(),
        row.discharge_date.clone(),
    ]
}

fn render_table(rows: &[[String; 3]]) -> String {
    let mut widths = HEADERS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 3]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        format!("| {} |", padded.join(" | "))
    };
    let rule = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let mut out = vec![rule.clone(), line(HEADERS), rule.clone()];
    for row in rows {
        out.push(line([row[0].as_str(), row[1].as_str(), row[2].as_str()]));
    }
    out.push(rule);
    out.join("\n")
}
