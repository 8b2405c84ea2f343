//! XML documentation rendering.
//!
//! Produces the `///` lines a host splices in front of a declaration, in a
//! fixed element order: summary, typeparam, param, returns, value, remarks,
//! example. Text is emitted as-is; generated text already carries its own
//! markup (`<see cref=".."/>`, CDATA blocks).

use crate::comment::DocComment;

/// Render `comment` as `///` lines, each prefixed with `indent`.
///
/// Multi-line section text is written one `///` line per text line. An empty
/// comment renders as the empty string.
pub fn to_xml(comment: &DocComment, indent: &str) -> String {
    let mut out = String::new();

    if let Some(summary) = &comment.summary {
        block(&mut out, indent, "summary", summary);
    }
    for entry in &comment.type_params {
        inline(
            &mut out,
            indent,
            &format!("typeparam name=\"{}\"", entry.name),
            "typeparam",
            &entry.text,
        );
    }
    for entry in &comment.params {
        inline(
            &mut out,
            indent,
            &format!("param name=\"{}\"", entry.name),
            "param",
            &entry.text,
        );
    }
    if let Some(returns) = &comment.returns {
        inline(&mut out, indent, "returns", "returns", returns);
    }
    if let Some(value) = &comment.value {
        inline(&mut out, indent, "value", "value", value);
    }
    if let Some(remarks) = &comment.remarks {
        block(&mut out, indent, "remarks", remarks);
    }
    if let Some(example) = &comment.example {
        block(&mut out, indent, "example", example);
    }

    out
}

/// `/// <tag>` / text lines / `/// </tag>`.
fn block(out: &mut String, indent: &str, tag: &str, text: &str) {
    line(out, indent, &format!("<{tag}>"));
    for text_line in text.lines() {
        line(out, indent, text_line.trim_end());
    }
    line(out, indent, &format!("</{tag}>"));
}

/// `/// <open>text</close>` for single-line text, otherwise a block.
fn inline(out: &mut String, indent: &str, open: &str, close: &str, text: &str) {
    if text.contains('\n') {
        line(out, indent, &format!("<{open}>"));
        for text_line in text.lines() {
            line(out, indent, text_line.trim_end());
        }
        line(out, indent, &format!("</{close}>"));
    } else {
        line(out, indent, &format!("<{open}>{text}</{close}>"));
    }
}

fn line(out: &mut String, indent: &str, content: &str) {
    out.push_str(indent);
    if content.is_empty() {
        out.push_str("///");
    } else {
        out.push_str("/// ");
        out.push_str(content);
    }
    out.push('\n');
}
