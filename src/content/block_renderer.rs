use std::fmt::Write;

use crate::content::render_error::RenderError;
use crate::content::ContentBlock;

/// Renders the body blocks in input order, one pass. Any error aborts the
/// whole render, so a caller never receives a partial body.
pub fn render_blocks(blocks: &[ContentBlock]) -> Result<String, RenderError> {
    let mut buf = String::new();

    for block in blocks {
        match block {
            ContentBlock::Paragraph { text } => {
                let _ = writeln!(&mut buf, "{}\n", text);
            }
            ContentBlock::Blockquote { text } => {
                let _ = writeln!(&mut buf, "> {}\n", text);
            }
            ContentBlock::CodeBlock { language, code } => {
                // Only html and inline snippets are fenced. Other languages
                // are emitted verbatim, as the MDX templates expect.
                if language == "html" || language == "inline" {
                    let _ = writeln!(&mut buf, "```{}\n{}\n```\n", language, code);
                } else {
                    let _ = writeln!(&mut buf, "{}\n", code);
                }
            }
            ContentBlock::Heading { level, text } => {
                if !(1..=6).contains(level) {
                    return Err(RenderError::InvalidHeadingLevel { level: *level });
                }
                let _ = writeln!(&mut buf, "{} {}\n", "#".repeat(*level as usize), text);
            }
            ContentBlock::List { items } => {
                for item in items {
                    let _ = writeln!(&mut buf, "- {}", item);
                }
                let _ = writeln!(&mut buf);
            }
            ContentBlock::Link { text, href } => {
                let _ = writeln!(&mut buf, "[{}]({})\n", text, href);
            }
            ContentBlock::Table { headers, rows } => {
                for (row, cells) in rows.iter().enumerate() {
                    if cells.len() != headers.len() {
                        return Err(RenderError::RowLengthMismatch {
                            row,
                            cells: cells.len(),
                            columns: headers.len(),
                        });
                    }
                }

                let _ = writeln!(&mut buf, "{}", headers.join(" | "));
                let _ = writeln!(&mut buf, "{}", vec!["---"; headers.len()].join(" | "));
                for row in rows {
                    let _ = writeln!(&mut buf, "{}", row.join(" | "));
                }
                let _ = writeln!(&mut buf);
            }
        }
    }

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_keep_order() {
        let blocks = vec![
            ContentBlock::Paragraph { text: "First".to_string() },
            ContentBlock::Paragraph { text: "Second".to_string() },
        ];
        let body = render_blocks(&blocks).unwrap();
        assert_eq!(body, "First\n\nSecond\n\n");
    }

    #[test]
    fn test_blockquote() {
        let blocks = vec![ContentBlock::Blockquote { text: "Less is more".to_string() }];
        let body = render_blocks(&blocks).unwrap();
        assert_eq!(body, "> Less is more\n\n");
    }

    #[test]
    fn test_html_code_is_fenced() {
        let blocks = vec![ContentBlock::CodeBlock {
            language: "html".to_string(),
            code: "<div/>".to_string(),
        }];
        let body = render_blocks(&blocks).unwrap();
        assert_eq!(body, "```html\n<div/>\n```\n\n");
    }

    #[test]
    fn test_inline_code_is_fenced() {
        let blocks = vec![ContentBlock::CodeBlock {
            language: "inline".to_string(),
            code: "cargo new hello".to_string(),
        }];
        let body = render_blocks(&blocks).unwrap();
        assert_eq!(body, "```inline\ncargo new hello\n```\n\n");
    }

    #[test]
    fn test_other_code_is_bare() {
        let blocks = vec![ContentBlock::CodeBlock {
            language: "python".to_string(),
            code: "x=1".to_string(),
        }];
        let body = render_blocks(&blocks).unwrap();
        assert_eq!(body, "x=1\n\n");
    }

    #[test]
    fn test_heading_marker_count() {
        let blocks = vec![ContentBlock::Heading { level: 3, text: "Intro".to_string() }];
        let body = render_blocks(&blocks).unwrap();
        assert_eq!(body, "### Intro\n\n");
    }

    #[test]
    fn test_heading_level_out_of_range() {
        let too_low = vec![ContentBlock::Heading { level: 0, text: "Bad".to_string() }];
        let res = render_blocks(&too_low);
        assert!(matches!(res, Err(RenderError::InvalidHeadingLevel { level: 0 })));

        let too_high = vec![ContentBlock::Heading { level: 7, text: "Bad".to_string() }];
        let res = render_blocks(&too_high);
        assert!(matches!(res, Err(RenderError::InvalidHeadingLevel { level: 7 })));
    }

    #[test]
    fn test_list_is_always_unordered() {
        let blocks = vec![ContentBlock::List {
            items: vec!["x".to_string(), "y".to_string()],
        }];
        let body = render_blocks(&blocks).unwrap();
        assert_eq!(body, "- x\n- y\n\n");
    }

    #[test]
    fn test_link() {
        let blocks = vec![ContentBlock::Link {
            text: "The Rust Book".to_string(),
            href: "https://doc.rust-lang.org/book/".to_string(),
        }];
        let body = render_blocks(&blocks).unwrap();
        assert_eq!(body, "[The Rust Book](https://doc.rust-lang.org/book/)\n\n");
    }

    #[test]
    fn test_table() {
        let blocks = vec![ContentBlock::Table {
            headers: vec!["A".to_string(), "B".to_string()],
            rows: vec![vec!["1".to_string(), "2".to_string()]],
        }];
        let body = render_blocks(&blocks).unwrap();
        assert_eq!(body, "A | B\n--- | ---\n1 | 2\n\n");
    }

    #[test]
    fn test_single_column_table_divider() {
        let blocks = vec![ContentBlock::Table {
            headers: vec!["Only".to_string()],
            rows: vec![vec!["one".to_string()]],
        }];
        let body = render_blocks(&blocks).unwrap();
        assert_eq!(body, "Only\n---\none\n\n");
    }

    #[test]
    fn test_zero_column_table() {
        let blocks = vec![ContentBlock::Table { headers: vec![], rows: vec![] }];
        let body = render_blocks(&blocks).unwrap();
        assert_eq!(body, "\n\n\n");
    }

    #[test]
    fn test_row_length_mismatch() {
        let blocks = vec![ContentBlock::Table {
            headers: vec!["A".to_string(), "B".to_string()],
            rows: vec![
                vec!["1".to_string(), "2".to_string()],
                vec!["3".to_string()],
            ],
        }];
        let res = render_blocks(&blocks);
        assert!(matches!(
            res,
            Err(RenderError::RowLengthMismatch { row: 1, cells: 1, columns: 2 })
        ));
    }

    #[test]
    fn test_empty_sequence() {
        let body = render_blocks(&[]).unwrap();
        assert_eq!(body, "");
    }
}
