//! HTML rendering for the viewer pages.
//!
//! Every piece of record- or query-derived text passes through
//! [`escape_html`] before it is embedded in a document. That escaping
//! step is the security contract of this module: a malicious audit
//! record field or query string must not be able to alter the
//! structure of the rendered page.

use std::fmt::Write;

use audit_store::Record;

use crate::error::WebResult;

/// Inline stylesheet shared by both pages.
const STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 0; padding: 20px; }\n\
h1 { color: #333; }\n\
#search { margin-bottom: 20px; }\n\
#logs { border: 1px solid #ddd; padding: 10px; }\n\
pre { white-space: pre-wrap; word-wrap: break-word; }";

/// Escapes text for safe embedding in HTML element content or
/// double-quoted attribute values.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders the full-listing page (`GET /`).
///
/// # Errors
///
/// Returns [`crate::error::WebError::Render`] if document assembly
/// fails.
pub fn render_index(title: &str, records: &[Record]) -> WebResult<String> {
    let mut out = String::new();
    write_head(&mut out, title)?;

    writeln!(out, "    <h1>{}</h1>", escape_html(title))?;
    write_search_form(&mut out, "")?;
    write_records(&mut out, records.iter())?;

    write_tail(&mut out)?;
    Ok(out)
}

/// Renders the search-results page (`GET /search?query=...`).
///
/// The query is echoed back into the form input's value attribute,
/// escaped, and the page links back to the unfiltered view.
///
/// # Errors
///
/// Returns [`crate::error::WebError::Render`] if document assembly
/// fails.
pub fn render_results(title: &str, query: &str, records: &[&Record]) -> WebResult<String> {
    let mut out = String::new();
    write_head(&mut out, &format!("Search Results - {title}"))?;

    writeln!(out, "    <h1>Search Results</h1>")?;
    write_search_form(&mut out, query)?;
    writeln!(out, "    <a href=\"/\">Back to full log</a>")?;
    write_records(&mut out, records.iter().copied())?;

    write_tail(&mut out)?;
    Ok(out)
}

fn write_head(out: &mut String, title: &str) -> WebResult<()> {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "    <title>{}</title>", escape_html(title))?;
    writeln!(out, "    <style>\n{STYLE}\n    </style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    Ok(())
}

fn write_search_form(out: &mut String, query: &str) -> WebResult<()> {
    writeln!(out, "    <div id=\"search\">")?;
    writeln!(out, "        <form action=\"/search\" method=\"get\">")?;
    writeln!(
        out,
        "            <input type=\"text\" name=\"query\" placeholder=\"Search logs...\" value=\"{}\">",
        escape_html(query)
    )?;
    writeln!(out, "            <input type=\"submit\" value=\"Search\">")?;
    writeln!(out, "        </form>")?;
    writeln!(out, "    </div>")?;
    Ok(())
}

fn write_records<'a, I>(out: &mut String, records: I) -> WebResult<()>
where
    I: Iterator<Item = &'a Record>,
{
    writeln!(out, "    <div id=\"logs\">")?;
    for record in records {
        writeln!(out, "        <pre>{}</pre>", escape_html(record.canonical_text()))?;
    }
    writeln!(out, "    </div>")?;
    Ok(())
}

fn write_tail(out: &mut String) -> WebResult<()> {
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn record(line: &str) -> Record {
        Record::parse(line).unwrap()
    }

    #[test_case("plain text", "plain text")]
    #[test_case("<script>", "&lt;script&gt;")]
    #[test_case("a & b", "a &amp; b")]
    #[test_case("\"quoted\"", "&quot;quoted&quot;")]
    #[test_case("it's", "it&#39;s")]
    #[test_case("", "")]
    fn escape_html_cases(input: &str, expected: &str) {
        assert_eq!(escape_html(input), expected);
    }

    #[test]
    fn escape_html_neutralizes_script_tags() {
        let escaped = escape_html("<script>alert(1)</script>");
        assert!(!escaped.contains("<script>"));
        assert!(escaped.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn index_lists_records_in_order() {
        let records = vec![record("{\"n\":1}"), record("{\"n\":2}")];
        let html = render_index("Audit Log Viewer", &records).unwrap();

        let first = html.find("{&quot;n&quot;:1}").unwrap();
        let second = html.find("{&quot;n&quot;:2}").unwrap();
        assert!(first < second);
    }

    #[test]
    fn index_contains_search_form() {
        let html = render_index("Audit Log Viewer", &[]).unwrap();

        assert!(html.contains("<form action=\"/search\" method=\"get\">"));
        assert!(html.contains("name=\"query\""));
        assert!(html.contains("<title>Audit Log Viewer</title>"));
    }

    #[test]
    fn index_escapes_record_content() {
        let records = vec![record("{\"payload\":\"<script>alert(1)</script>\"}")];
        let html = render_index("Audit Log Viewer", &records).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn results_echo_query_escaped() {
        let html = render_results("Audit Log Viewer", "\"><script>", &[]).unwrap();

        assert!(!html.contains("value=\"\"><script>"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
    }

    #[test]
    fn results_link_back_to_full_log() {
        let html = render_results("Audit Log Viewer", "delete", &[]).unwrap();

        assert!(html.contains("<a href=\"/\">Back to full log</a>"));
        assert!(html.contains("<title>Search Results - Audit Log Viewer</title>"));
    }

    #[test]
    fn results_list_matched_records() {
        let rec = record("{\"verb\":\"delete\"}");
        let html = render_results("Audit Log Viewer", "delete", &[&rec]).unwrap();

        assert!(html.contains("{&quot;verb&quot;:&quot;delete&quot;}"));
    }

    #[test]
    fn documents_are_self_contained() {
        let html = render_index("Audit Log Viewer", &[]).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
