//! Request display formatting
//!
//! Formats requests for terminal output in table and detail views, plus
//! their audit history and comment threads.

use crate::audit::AuditEvent;
use crate::models::{Comment, CommentKind, Request};
use crate::schema::{self, Group};
use crate::services::UpdateOutcome;

use super::{pad, truncate};

/// Format a list of requests as a table
pub fn format_request_list(requests: &[Request], date_format: &str) -> String {
    if requests.is_empty() {
        return "No requests found.".to_string();
    }

    let code_width = requests
        .iter()
        .map(|r| r.master_code().map(|c| c.chars().count()).unwrap_or(0))
        .max()
        .unwrap_or(0)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<9}  {}  {:<16}  {:<12}  {}\n",
        "ID",
        "Status",
        pad("Matnr", code_width),
        "Created",
        "Requester",
        "Description",
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<9}  {:-<code_width$}  {:-<16}  {:-<12}  {:-<20}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        code_width = code_width,
    ));

    for request in requests {
        output.push_str(&format!(
            "{:<12}  {:<9}  {}  {:<16}  {}  {}\n",
            request.id.to_string(),
            request.status.to_string(),
            pad(&request.master_code().unwrap_or_default(), code_width),
            request.created_at.format(date_format).to_string(),
            pad(&truncate(&request.requester, 12), 12),
            truncate(&request.title(), 40),
        ));
    }

    output.push_str(&format!("\n{} request(s)\n", requests.len()));
    output
}

/// Format a request with its attributes grouped by section
///
/// Blank attributes are skipped unless `show_blank` is set.
pub fn format_request_details(request: &Request, date_format: &str, show_blank: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("Request: {}\n", request.title()));
    output.push_str(&format!("  ID:         {}\n", request.id));
    output.push_str(&format!("  Status:     {}\n", request.status));
    output.push_str(&format!("  Requester:  {}\n", request.requester));
    output.push_str(&format!(
        "  Created:    {}\n",
        request.created_at.format(date_format)
    ));
    output.push_str(&format!(
        "  Updated:    {}\n",
        request.updated_at.format(date_format)
    ));
    if let Some(completed) = request.completed_at {
        output.push_str(&format!("  Approved:   {}\n", completed.format(date_format)));
    }
    output.push_str(&format!("  Version:    {}\n", request.version));

    for group in Group::ALL {
        let rows: Vec<_> = schema::attributes_in(*group)
            .filter_map(|def| {
                let value = request.snapshot.value(def.key);
                if value.is_blank() && !show_blank {
                    return None;
                }
                Some((def, def.kind.render(value)))
            })
            .collect();

        if rows.is_empty() {
            continue;
        }

        let label_width = rows
            .iter()
            .map(|(def, _)| def.label.chars().count())
            .max()
            .unwrap_or(0);

        output.push('\n');
        output.push_str(&format!("  {}\n", group.title()));
        for (def, rendered) in rows {
            let marker = if def.required && rendered.is_empty() { " *" } else { "" };
            output.push_str(&format!(
                "    {}  {:<12} {}{}\n",
                pad(def.label, label_width),
                def.key.code(),
                rendered,
                marker
            ));
        }
    }

    let missing = request.snapshot.missing_required();
    if !missing.is_empty() {
        output.push('\n');
        output.push_str(&format!("  {} required attribute(s) missing\n", missing.len()));
    }

    output
}

/// Format audit events as a history log (input order is kept)
pub fn format_history(events: &[AuditEvent]) -> String {
    if events.is_empty() {
        return "No history recorded.\n".to_string();
    }

    let mut output = String::new();
    for event in events {
        output.push_str(&event.format_human_readable());
        output.push('\n');
    }
    output
}

/// Format a comment thread, oldest first
pub fn format_comments(comments: &[Comment], date_format: &str) -> String {
    if comments.is_empty() {
        return "No comments.\n".to_string();
    }

    let mut output = String::new();
    for comment in comments {
        let tag = match comment.kind {
            CommentKind::Note => String::new(),
            kind => format!(" [{}]", kind),
        };
        output.push_str(&format!(
            "{} {}{}: {}\n",
            comment.created_at.format(date_format),
            comment.writer,
            tag,
            comment.message
        ));
    }
    output
}

/// Summarize the result of an update for the user
pub fn format_update_outcome(outcome: &UpdateOutcome) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Updated request {} (version {})\n",
        outcome.request.id, outcome.request.version
    ));

    if outcome.changes.is_empty() {
        output.push_str("  No corrections detected\n");
    } else {
        for change in &outcome.changes {
            output.push_str(&format!(
                "  {}: {} → {}\n",
                change.label, change.old_display, change.new_display
            ));
        }
    }

    if !outcome.is_complete() {
        let codes: Vec<_> = outcome.missing_required.iter().map(|k| k.code()).collect();
        output.push_str(&format!("Warning: required attributes missing: {}\n", codes.join(", ")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{ActionKind, FieldChange};
    use crate::models::{RequestId, RequestStatus, Snapshot};
    use crate::schema::AttrKey;

    const DATE: &str = "%Y-%m-%d %H:%M";

    fn sample_request() -> Request {
        let mut snapshot = Snapshot::with_defaults();
        snapshot.set(AttrKey::Matnr, "100200");
        snapshot.set(AttrKey::Maktx, "얼큰한맛 라면");
        snapshot.set(AttrKey::Xchpf, "X");
        let mut request = Request::new(snapshot, "kim");
        request.status = RequestStatus::Review;
        request
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_request_list(&[], DATE), "No requests found.");
    }

    #[test]
    fn test_request_list() {
        let request = sample_request();
        let output = format_request_list(&[request.clone()], DATE);

        assert!(output.contains(&request.id.to_string()));
        assert!(output.contains("Review"));
        assert!(output.contains("100200"));
        assert!(output.contains("얼큰한맛 라면"));
        assert!(output.contains("1 request(s)"));
    }

    #[test]
    fn test_details_group_and_render() {
        let output = format_request_details(&sample_request(), DATE, false);

        assert!(output.contains("Basic Data"));
        assert!(output.contains("Classification"));
        assert!(output.contains("ZMAT_FOOD"));
        // Flags render as Yes
        assert!(output.contains("XCHPF"));
        assert!(output.contains("Yes"));
        // Blank attributes are hidden by default
        assert!(!output.contains("BISMT"));
        assert!(output.contains("required attribute(s) missing"));
    }

    #[test]
    fn test_details_show_blank_marks_required() {
        let output = format_request_details(&sample_request(), DATE, true);
        assert!(output.contains("BISMT"));
        assert!(output.lines().any(|l| l.contains("MATKL") && l.ends_with('*')));
    }

    #[test]
    fn test_history_and_comments() {
        let id = RequestId::new();
        let event = AuditEvent::new(id, "lee", ActionKind::Update, "Material Description", "a", "b");
        assert!(format_history(&[event]).contains("UPDATE Material Description by lee: a → b"));
        assert_eq!(format_history(&[]), "No history recorded.\n");

        let comments = vec![
            Comment::note(id, "kim", "please check"),
            Comment::change_summary(id, "lee", "1 items changed: x"),
        ];
        let output = format_comments(&comments, DATE);
        assert!(output.contains("kim: please check"));
        assert!(output.contains("lee [changes]: 1 items changed: x"));
    }

    #[test]
    fn test_update_outcome() {
        let outcome = UpdateOutcome {
            request: sample_request(),
            changes: vec![FieldChange {
                key: AttrKey::Maktx,
                label: "Material Description",
                old_display: "a".into(),
                new_display: "(empty)".into(),
            }],
            missing_required: vec![AttrKey::Matkl],
        };

        let output = format_update_outcome(&outcome);
        assert!(output.contains("Material Description: a → (empty)"));
        assert!(output.contains("Warning: required attributes missing: MATKL"));
    }
}
