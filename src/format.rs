//! Platform envelopes.
//!
//! Each target chat platform expects multi-document context wrapped in a
//! particular textual convention. Every renderer here is a fixed string
//! template over the combined document and its recorded file list; nothing
//! consults the runtime environment.

use crate::models::{CombinedDocument, Platform};

/// Render a combined document in the envelope a target platform expects.
pub fn render(platform: Platform, document: &CombinedDocument) -> String {
    match platform {
        Platform::Raw => document.text.clone(),
        Platform::V0 => render_v0(document),
        Platform::ChatGpt => render_chatgpt(document),
        Platform::Claude => render_claude(document),
        Platform::Cursor => render_cursor(document),
    }
}

/// v0.dev: a "Context Upload" heading, plus a numbered file manifest when
/// more than one file is present.
fn render_v0(document: &CombinedDocument) -> String {
    let mut out = String::from("# Context Upload\n\n");

    if document.file_list.len() > 1 {
        out.push_str("## Files Included\n\n");
        for (idx, name) in document.file_list.iter().enumerate() {
            out.push_str(&format!("{}. `{}`\n", idx + 1, name));
        }
        out.push_str("\n---\n\n");
    }

    out.push_str(&document.text);
    out
}

/// ChatGPT: a lead-in sentence with the document count, then one
/// `## Document N` heading per file. The per-file content already lives in
/// the document text, so the headings stand alone.
fn render_chatgpt(document: &CombinedDocument) -> String {
    let count = document.file_list.len();
    let plural = if count > 1 { "s" } else { "" };
    let mut out = format!("I'm sharing {} document{} for context:\n\n", count, plural);

    for (idx, name) in document.file_list.iter().enumerate() {
        out.push_str(&format!("## Document {}: {}\n\n", idx + 1, name));
    }

    out.push_str("\n---\n\n");
    out.push_str(&document.text);
    out
}

/// Claude: a `<documents>` root pseudo-tag with one `<document name="...">`
/// opening tag per file. The per-document tags are deliberately left
/// unclosed to match the shipped envelope.
fn render_claude(document: &CombinedDocument) -> String {
    let mut out = String::from("<documents>\n");

    for name in &document.file_list {
        out.push_str(&format!("<document name=\"{}\">\n", name));
    }

    out.push_str("</documents>\n\n");
    out.push_str(&document.text);
    out
}

/// Cursor: a one-line comment banner with the file count.
fn render_cursor(document: &CombinedDocument) -> String {
    let count = document.file_list.len();
    let plural = if count > 1 { "s" } else { "" };
    format!(
        "// Context from {} file{}\n\n{}",
        count, plural, document.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str, names: &[&str]) -> CombinedDocument {
        CombinedDocument {
            text: text.to_string(),
            file_list: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn raw_is_identity_on_text() {
        let d = doc("# a.md\n\nHello", &["a.md"]);
        assert_eq!(render(Platform::Raw, &d), d.text);
    }

    #[test]
    fn v0_single_file_has_no_manifest() {
        let d = doc("Hello", &["a.md"]);
        let out = render(Platform::V0, &d);
        assert_eq!(out, "# Context Upload\n\nHello");
        assert!(!out.contains("Files Included"));
    }

    #[test]
    fn v0_multiple_files_list_numbered_backticked_names() {
        let d = doc("body", &["a.md", "b.md"]);
        let out = render(Platform::V0, &d);
        assert!(out.starts_with("# Context Upload\n\n## Files Included\n\n"));
        assert!(out.contains("1. `a.md`\n"));
        assert!(out.contains("2. `b.md`\n"));
        assert!(out.contains("\n---\n\nbody"));
    }

    #[test]
    fn chatgpt_singular_and_plural_agree_with_count() {
        let one = render(Platform::ChatGpt, &doc("x", &["a.md"]));
        assert!(one.starts_with("I'm sharing 1 document for context:\n\n"));
        assert!(one.contains("## Document 1: a.md\n\n"));

        let two = render(Platform::ChatGpt, &doc("x", &["a.md", "b.md"]));
        assert!(two.starts_with("I'm sharing 2 documents for context:\n\n"));
        assert!(two.contains("## Document 2: b.md\n\n"));
        assert!(two.ends_with("\n---\n\nx"));
    }

    #[test]
    fn claude_opens_documents_and_tags_every_file() {
        let d = doc("body", &["a.md", "b.md", "c.md"]);
        let out = render(Platform::Claude, &d);
        assert!(out.starts_with("<documents>\n"));
        assert_eq!(out.matches("<document name=").count(), 3);
        assert!(out.contains("<document name=\"a.md\">\n"));
        // Per-document tags are intentionally unclosed.
        assert!(!out.contains("</document>\n"));
        assert!(out.contains("</documents>\n\nbody"));
    }

    #[test]
    fn cursor_banner_matches_combined_scenario() {
        // End-to-end shape from combine: a.md "Hello" + b.md "World".
        let d = doc("# a.md\n\nHello\n\n---\n\n# b.md\n\nWorld", &["a.md", "b.md"]);
        assert_eq!(
            render(Platform::Cursor, &d),
            "// Context from 2 files\n\n# a.md\n\nHello\n\n---\n\n# b.md\n\nWorld"
        );
    }
}
