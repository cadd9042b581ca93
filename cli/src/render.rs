//! Plain-text rendering of backend data for the terminal.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write;

use schema::{Category, CurrentUser, Lead, Pagination, Worker};

/// Cut `text` to `width` characters, marking the cut with `…`.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

fn row(out: &mut String, cells: &[(&str, usize)]) {
    let line: Vec<String> = cells.iter().map(|(text, width)| format!("{:<width$}", fit(text, *width))).collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

/// One line per lead, with a header.
#[must_use]
pub fn lead_table(leads: &[Lead]) -> String {
    if leads.is_empty() {
        return "No leads found.\n".to_owned();
    }
    let mut out = String::new();
    row(
        &mut out,
        &[("ID", 24), ("NAME", 20), ("CATEGORY", 14), ("PRIORITY", 8), ("STATUS", 11), ("ASSIGNED", 14), ("FOLLOW-UP", 11)],
    );
    for lead in leads {
        let follow_up = lead.follow_up_label();
        row(
            &mut out,
            &[
                (&lead.id, 24),
                (&lead.name, 20),
                (lead.category_title(), 14),
                (lead.priority.label(), 8),
                (lead.status.label(), 11),
                (lead.assignee_label(), 14),
                (&follow_up, 11),
            ],
        );
    }
    out
}

#[must_use]
pub fn pagination_line(pagination: Pagination, shown: usize) -> String {
    format!("page {} of {} ({shown} shown)", pagination.current_page, pagination.total_pages)
}

/// Every field of one lead.
#[must_use]
pub fn lead_detail(lead: &Lead) -> String {
    let mut out = String::new();
    let dates: Vec<String> = lead.follow_up_dates.iter().copied().map(schema::format::format_input_date).collect();
    let fields = [
        ("ID", lead.id.clone()),
        ("Name", lead.name.clone()),
        ("Email", lead.email_label().to_owned()),
        ("Phone", lead.phone_label().to_owned()),
        ("Position", lead.position_label().to_owned()),
        ("Source", lead.lead_source.clone().unwrap_or_default()),
        ("Category", lead.category_title().to_owned()),
        ("Priority", lead.priority.label().to_owned()),
        ("Status", lead.status.label().to_owned()),
        ("Assigned to", lead.assignee_label().to_owned()),
        ("Last contact", lead.last_contact_label()),
        ("Follow-ups", dates.join(", ")),
        ("Documents", lead.documents.join(", ")),
        ("Notes", lead.notes.clone().unwrap_or_default()),
    ];
    for (label, value) in fields {
        let _ = writeln!(out, "{label:<13}{value}");
    }
    out
}

#[must_use]
pub fn category_table(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories.\n".to_owned();
    }
    let mut out = String::new();
    row(&mut out, &[("ID", 24), ("TITLE", 20), ("COLOR", 8), ("DESCRIPTION", 40)]);
    for c in categories {
        row(&mut out, &[(&c.id, 24), (&c.title, 20), (&c.color, 8), (&c.description, 40)]);
    }
    out
}

#[must_use]
pub fn worker_table(workers: &[Worker]) -> String {
    if workers.is_empty() {
        return "No workers.\n".to_owned();
    }
    let mut out = String::new();
    row(&mut out, &[("ID", 24), ("NAME", 30)]);
    for w in workers {
        row(&mut out, &[(&w.id, 24), (&w.name, 30)]);
    }
    out
}

#[must_use]
pub fn whoami(user: &CurrentUser) -> String {
    match user.email.as_deref() {
        Some(email) => format!("{} <{email}>", user.name),
        None => user.name.clone(),
    }
}
