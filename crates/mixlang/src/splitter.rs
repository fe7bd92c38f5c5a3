//! Splitting mix files into language-tagged sections.
//!
//! A mix file is plain text. A line that starts with `[` and ends with `]`
//! (no whitespace tolerance) is a boundary marker: it closes the section in
//! progress and opens a new one tagged with the text between the brackets.
//! Every other line belongs to the most recently opened section.
//!
//! ```text
//! [js]            <- marker, opens section "js"
//! let a = 1;      <- code of "js"
//! [py]            <- marker, finalizes "js", opens "py"
//! def f():        <- code of "py"
//!     pass
//! ```
//!
//! The splitter is permissive. Lines before the first marker are dropped,
//! `[]` opens a section with an empty tag, and adjacent markers produce a
//! section with empty code. Bytes that are not valid UTF-8 are decoded
//! lossily. None of these are errors; the only failure is I/O on the
//! underlying reader.

use std::io::BufRead;

use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::types::Section;

/// Returns `true` if `line` is a section boundary marker.
///
/// The line is tested as-is: leading or trailing whitespace disqualifies it.
#[must_use]
pub fn is_boundary_marker(line: &str) -> bool {
    line.starts_with('[') && line.ends_with(']')
}

/// Language tag carried by a boundary marker, or `None` for ordinary lines.
///
/// Bracket characters are trimmed from both ends; interior text, including
/// whitespace, is kept verbatim.
#[must_use]
pub fn marker_language(line: &str) -> Option<&str> {
    is_boundary_marker(line).then(|| line.trim_matches(['[', ']']))
}

/// Remove a trailing `\n`, then a trailing `\r`, from one raw line.
fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// A section still receiving lines.
#[derive(Debug)]
struct SectionBuilder {
    language: String,
    code: String,
}

impl SectionBuilder {
    fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            code: String::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.code.push_str(line);
        self.code.push('\n');
    }

    fn finish(self) -> Section {
        Section::new(self.language, self.code)
    }
}

/// Incremental section splitter.
///
/// Feed lines in order with [`feed`](Self::feed), then call
/// [`finish`](Self::finish) to close the last section. Lines must already
/// have their line terminator removed.
#[derive(Debug, Default)]
pub struct SectionSplitter {
    sections: Vec<Section>,
    current: Option<SectionBuilder>,
    dropped_lines: usize,
}

impl SectionSplitter {
    /// Create a splitter with no open section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one line of input.
    pub fn feed(&mut self, line: &str) {
        if let Some(language) = marker_language(line) {
            self.finalize_current();
            self.current = Some(SectionBuilder::new(language));
            return;
        }

        match self.current.as_mut() {
            Some(builder) => builder.push_line(line),
            None => self.dropped_lines += 1,
        }
    }

    /// Lines seen so far that came before the first marker.
    #[must_use]
    pub fn dropped_lines(&self) -> usize {
        self.dropped_lines
    }

    /// Close any open section and return every section in input order.
    #[must_use]
    pub fn finish(mut self) -> Vec<Section> {
        self.finalize_current();
        if self.dropped_lines > 0 {
            warn!(
                lines = self.dropped_lines,
                "Ignoring content outside of a language section"
            );
        }
        debug!(
            sections = self.sections.len(),
            dropped_lines = self.dropped_lines,
            "Section splitting completed"
        );
        self.sections
    }

    fn finalize_current(&mut self) {
        if let Some(builder) = self.current.take() {
            let section = builder.finish();
            trace!(
                language = %section.language,
                bytes = section.code.len(),
                "Section finalized"
            );
            self.sections.push(section);
        }
    }
}

/// Split everything readable from `reader` into sections.
///
/// Lines end at `\n`; a `\r` left before it, or at the very end of input,
/// is stripped too. Invalid UTF-8 is replaced with `U+FFFD` rather than
/// rejected.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if reading fails. Sections
/// gathered before the failure are discarded.
pub fn split_reader<R: BufRead>(mut reader: R) -> Result<Vec<Section>> {
    let mut splitter = SectionSplitter::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        splitter.feed(strip_terminator(&String::from_utf8_lossy(&buf)));
    }
    Ok(splitter.finish())
}

/// Split in-memory text into sections.
///
/// Line handling matches [`split_reader`].
#[must_use]
pub fn split_str(input: &str) -> Vec<Section> {
    let mut splitter = SectionSplitter::new();
    for line in input.split_inclusive('\n') {
        splitter.feed(strip_terminator(line));
    }
    splitter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use std::io::{BufReader, Cursor, Read};

    #[rstest]
    #[case::plain("[js]", Some("js"))]
    #[case::empty("[]", Some(""))]
    #[case::inner_whitespace("[ py 3 ]", Some(" py 3 "))]
    #[case::leading_space(" [js]", None)]
    #[case::trailing_space("[js] ", None)]
    #[case::open_only("[js", None)]
    #[case::close_only("js]", None)]
    #[case::code("let a = [1];", None)]
    #[case::array_literal("[1, 2, 3]", Some("1, 2, 3"))]
    fn marker_recognition(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(marker_language(line), expected);
        assert_eq!(is_boundary_marker(line), expected.is_some());
    }

    #[test]
    fn nested_brackets_are_trimmed_from_both_ends() {
        assert_eq!(marker_language("[[js]]"), Some("js"));
    }

    #[test]
    fn splits_two_sections() {
        let sections = split_str("[js]\nlet a = 1;\n[py]\ndef f():\n    pass\n");

        assert_eq!(
            sections,
            vec![
                Section::new("js", "let a = 1;\n"),
                Section::new("py", "def f():\n    pass\n"),
            ]
        );
    }

    #[test]
    fn content_before_first_marker_is_dropped() {
        let sections = split_str("preamble\nmore\n[js]\nlet a = 1;\n");

        assert_eq!(sections, vec![Section::new("js", "let a = 1;\n")]);
    }

    #[test]
    fn adjacent_markers_produce_empty_code() {
        let sections = split_str("[js]\n[py]\nx = 1\n");

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0], Section::new("js", ""));
        assert_eq!(sections[1].code, "x = 1\n");
    }

    #[test]
    fn trailing_marker_produces_empty_section() {
        let sections = split_str("[js]\nlet a = 1;\n[py]");

        assert_eq!(sections.last(), Some(&Section::new("py", "")));
    }

    #[test]
    fn input_without_markers_is_empty() {
        assert!(split_str("let a = 1;\nx = 2\n").is_empty());
        assert!(split_str("").is_empty());
    }

    #[test]
    fn blank_lines_are_kept_verbatim() {
        let sections = split_str("[py]\n\nx = 1\n\n");

        assert_eq!(sections[0].code, "\nx = 1\n\n");
    }

    #[test]
    fn last_line_without_newline_still_gets_one() {
        let sections = split_str("[js]\nlet a = 1;");

        assert_eq!(sections[0].code, "let a = 1;\n");
    }

    #[test]
    fn crlf_terminators_are_stripped() {
        let sections = split_str("[js]\r\nlet a = 1;\r\n");

        assert_eq!(sections, vec![Section::new("js", "let a = 1;\n")]);
    }

    #[test]
    fn duplicate_tags_produce_separate_sections() {
        let sections = split_str("[js]\na\n[js]\nb\n");

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].code, "b\n");
    }

    #[test]
    fn split_reader_matches_split_str() {
        let input = "junk\n[js]\nlet a = 1;\n[]\n\n[py]\nx = 1\n";

        let from_reader = split_reader(Cursor::new(input)).expect("in-memory read should succeed");

        assert_eq!(from_reader, split_str(input));
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let bytes: &[u8] = b"[py]\n# caf\xe9\nx = 1\n";

        let sections = split_reader(Cursor::new(bytes)).expect("latin-1 bytes should not fail");

        assert_eq!(sections, vec![Section::new("py", "# caf\u{FFFD}\nx = 1\n")]);
    }

    #[test]
    fn bare_cr_at_end_of_input_is_stripped() {
        let input = "[js]\nlet a = 1;\r\n[py]\r";
        let expected = vec![Section::new("js", "let a = 1;\n"), Section::new("py", "")];

        let from_reader = split_reader(Cursor::new(input)).expect("read should succeed");

        assert_eq!(split_str(input), expected);
        assert_eq!(from_reader, expected);
    }

    #[test]
    fn inner_cr_is_kept() {
        let sections = split_str("[js]\na\rb\n");

        assert_eq!(sections[0].code, "a\rb\n");
    }

    #[test]
    fn lines_before_first_marker_are_counted() {
        let mut splitter = SectionSplitter::new();
        for line in ["#!/usr/bin/env mix", "", "[js]", "let a = 1;"] {
            splitter.feed(line);
        }

        assert_eq!(splitter.dropped_lines(), 2);
        assert_eq!(splitter.finish().len(), 1);
    }

    /// Yields `data` once, then fails every subsequent read.
    struct FailAfter {
        data: Option<Vec<u8>>,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            match self.data.take() {
                Some(data) => {
                    let n = data.len().min(buf.len());
                    buf[..n].copy_from_slice(&data[..n]);
                    Ok(n)
                }
                None => Err(std::io::Error::other("device unplugged")),
            }
        }
    }

    #[test]
    fn read_failure_discards_partial_sections() {
        let reader = BufReader::new(FailAfter {
            data: Some(b"[js]\nlet a = 1;\n[py]\n".to_vec()),
        });

        let err = split_reader(reader).expect_err("read failure should propagate");

        let source = std::error::Error::source(&err).expect("io error should carry a source");
        assert_eq!(source.to_string(), "device unplugged");
    }

    // === Properties ===

    fn code_line() -> impl Strategy<Value = String> {
        "[ -~]{0,24}".prop_filter("code lines must not look like markers", |line| {
            !is_boundary_marker(line)
        })
    }

    fn tag() -> impl Strategy<Value = String> {
        "[a-z0-9 ]{0,6}"
    }

    fn block() -> impl Strategy<Value = (String, Vec<String>)> {
        (tag(), prop::collection::vec(code_line(), 0..6))
    }

    fn render(preamble: &[String], blocks: &[(String, Vec<String>)]) -> String {
        let mut out = String::new();
        for line in preamble {
            out.push_str(line);
            out.push('\n');
        }
        for (tag, lines) in blocks {
            out.push('[');
            out.push_str(tag);
            out.push_str("]\n");
            for line in lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    proptest! {
        #[test]
        fn no_markers_means_no_sections(lines in prop::collection::vec(code_line(), 0..20)) {
            let input = render(&lines, &[]);
            prop_assert!(split_str(&input).is_empty());
        }

        #[test]
        fn one_section_per_marker(
            preamble in prop::collection::vec(code_line(), 0..3),
            blocks in prop::collection::vec(block(), 0..8),
        ) {
            let input = render(&preamble, &blocks);
            let markers = input.lines().filter(|line| is_boundary_marker(line)).count();

            prop_assert_eq!(split_str(&input).len(), markers);
        }

        #[test]
        fn code_never_contains_marker_lines(blocks in prop::collection::vec(block(), 0..8)) {
            let input = render(&[], &blocks);

            for section in split_str(&input) {
                prop_assert!(section.code.lines().all(|line| !is_boundary_marker(line)));
            }
        }

        #[test]
        fn code_round_trips_lines_between_markers(
            preamble in prop::collection::vec(code_line(), 0..3),
            blocks in prop::collection::vec(block(), 0..8),
        ) {
            let input = render(&preamble, &blocks);
            let sections = split_str(&input);

            prop_assert_eq!(sections.len(), blocks.len());
            for (section, (tag, lines)) in sections.iter().zip(&blocks) {
                let expected: String = lines.iter().map(|line| format!("{line}\n")).collect();
                prop_assert_eq!(&section.language, tag);
                prop_assert_eq!(&section.code, &expected);
            }
        }
    }
}
