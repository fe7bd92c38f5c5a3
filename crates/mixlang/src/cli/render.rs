//! Section rendering for the `mixlang` binary.

use std::io::{self, Write};

use colored::Colorize;
use mixlang::Section;

/// Write sections in the plain `Language:` / `Code:` layout.
///
/// With `show_identifiers`, each block is followed by its identifier list.
pub fn write_text(
    out: &mut impl Write,
    sections: &[Section],
    show_identifiers: bool,
) -> io::Result<()> {
    for section in sections {
        writeln!(out, "Language: {}\nCode:\n{}", section.language, section.code)?;

        if show_identifiers {
            write_identifiers(out, section)?;
        }
    }
    Ok(())
}

fn write_identifiers(out: &mut impl Write, section: &Section) -> io::Result<()> {
    writeln!(out, "{}", "Identifiers:".cyan().bold())?;
    if section.identifiers.is_empty() {
        writeln!(out, "  {}", "(none)".dimmed())?;
    }
    for identifier in &section.identifiers {
        writeln!(
            out,
            "  {:<8} {}",
            identifier.kind.as_str().dimmed(),
            identifier.name
        )?;
    }
    writeln!(out)
}

/// Write sections, identifiers included, as pretty JSON.
pub fn write_json(out: &mut impl Write, sections: &[Section]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, sections)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixlang::Pipeline;

    fn render_text(input: &str, show_identifiers: bool) -> String {
        let sections = Pipeline::default().parse_str(input);
        let mut out = Vec::new();
        write_text(&mut out, &sections, show_identifiers).expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("output should be UTF-8")
    }

    #[test]
    fn text_layout_matches_language_code_blocks() {
        let text = render_text("[js]\nlet a = 1;\n[py]\ndef f():\n    pass\n", false);

        assert_eq!(
            text,
            "Language: js\nCode:\nlet a = 1;\n\nLanguage: py\nCode:\ndef f():\n    pass\n\n"
        );
    }

    #[test]
    fn text_with_identifiers_lists_kind_and_name() {
        let text = render_text("[js]\nlet a = 1;\nclass B {}\n", true);

        assert!(text.starts_with("Language: js\nCode:\nlet a = 1;\nclass B {}\n\n"));
        assert!(text.contains("Identifiers:"));
        assert!(text.contains("variable"));
        assert!(text.contains(" a\n"));
        assert!(text.contains(" B\n"));
    }

    #[test]
    fn section_without_identifiers_says_none() {
        let text = render_text("[rb]\nputs 1\n", true);

        assert!(text.contains("(none)"));
    }

    #[test]
    fn json_includes_identifiers() {
        let sections = Pipeline::default().parse_str("[py]\nx = 1\n");
        let mut out = Vec::new();

        write_json(&mut out, &sections).expect("writing to a Vec cannot fail");

        let value: serde_json::Value = serde_json::from_slice(&out).expect("output should be JSON");
        assert_eq!(value[0]["language"], "py");
        assert_eq!(value[0]["code"], "x = 1\n");
        assert_eq!(value[0]["identifiers"][0]["name"], "x");
        assert_eq!(value[0]["identifiers"][0]["kind"], "variable");
    }
}
