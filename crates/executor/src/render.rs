//! Report rendering: ordered snapshot to wire bytes.
//!
//! Exactly one line per report. No live type: the literal `none`. Otherwise,
//! for each type in the snapshot's order: the quoted type name, each quoted
//! destination, then the shared count followed by `; `. The final `; `
//! immediately precedes the terminating newline.

use reltrack_core::ReportEntry;

/// Render one report snapshot into its single output line.
pub fn render_report(entries: &[ReportEntry]) -> String {
    if entries.is_empty() {
        return "none\n".to_string();
    }
    let mut line = String::new();
    for entry in entries {
        push_quoted(&mut line, entry.ty.as_str());
        for destination in &entry.destinations {
            push_quoted(&mut line, destination.as_str());
        }
        line.push_str(&entry.count.to_string());
        line.push_str("; ");
    }
    line.push('\n');
    line
}

fn push_quoted(line: &mut String, ident: &str) {
    line.push('"');
    line.push_str(ident);
    line.push_str("\" ");
}

#[cfg(test)]
mod tests {
    use super::*;
    use reltrack_core::{EntityName, TypeName};

    fn entry(ty: &str, destinations: &[&str], count: u64) -> ReportEntry {
        ReportEntry {
            ty: TypeName::from(ty),
            destinations: destinations.iter().copied().map(EntityName::from).collect(),
            count,
        }
    }

    #[test]
    fn test_empty_report_renders_none() {
        assert_eq!(render_report(&[]), "none\n");
    }

    #[test]
    fn test_single_type_single_destination() {
        let entries = vec![entry("follows", &["bob"], 1)];
        assert_eq!(render_report(&entries), "\"follows\" \"bob\" 1; \n");
    }

    #[test]
    fn test_tie_lists_every_destination() {
        let entries = vec![entry("likes", &["b", "c"], 1)];
        assert_eq!(render_report(&entries), "\"likes\" \"b\" \"c\" 1; \n");
    }

    #[test]
    fn test_multiple_types_concatenate_on_one_line() {
        let entries = vec![entry("alpha", &["y"], 1), entry("zeta", &["y"], 1)];
        assert_eq!(
            render_report(&entries),
            "\"alpha\" \"y\" 1; \"zeta\" \"y\" 1; \n"
        );
    }

    #[test]
    fn test_multi_digit_count() {
        let entries = vec![entry("follows", &["hub"], 128)];
        assert_eq!(render_report(&entries), "\"follows\" \"hub\" 128; \n");
    }
}
