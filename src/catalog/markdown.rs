//! Markdown parser for chapter bodies
//!
//! Parses the embedded chapter markdown into the content model. The
//! curriculum uses plain CommonMark, so no extensions are enabled.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag, TagEnd};

use super::model::{CodeBlock, ContentBlock};

/// Parse a markdown string into content blocks
pub fn parse_markdown_content(markdown: &str) -> Vec<ContentBlock> {
    let parser = Parser::new(markdown);
    let mut blocks = Vec::new();

    let mut current_text = String::default();
    let mut in_code_block = false;
    let mut code_language: Option<String> = None;
    let mut code_content = String::default();

    let mut in_list = false;
    let mut list_items: Vec<String> = Vec::new();
    let mut list_ordered = false;
    let mut current_list_item = String::default();

    let mut current_heading_level: Option<u8> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                flush_text(&mut current_text, &mut blocks);
                current_heading_level = Some(heading_level_to_u8(level));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(level) = current_heading_level.take() {
                    let text = std::mem::take(&mut current_text).trim().to_string();
                    if !text.is_empty() {
                        blocks.push(ContentBlock::Heading { level, text });
                    }
                }
            }

            Event::Start(Tag::Paragraph) => {
                // Starting a new paragraph
            }
            Event::End(TagEnd::Paragraph) => {
                if in_list {
                    current_list_item.push_str(&current_text);
                    current_text.clear();
                } else {
                    flush_text(&mut current_text, &mut blocks);
                }
            }

            Event::Start(Tag::CodeBlock(kind)) => {
                flush_text(&mut current_text, &mut blocks);
                in_code_block = true;
                code_language = match kind {
                    CodeBlockKind::Fenced(lang) => {
                        let lang = lang.to_string();
                        if lang.is_empty() { None } else { Some(lang) }
                    }
                    CodeBlockKind::Indented => None,
                };
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                let code = std::mem::take(&mut code_content);
                let mut code_block = CodeBlock::new(code.trim_end());
                if let Some(lang) = code_language.take() {
                    code_block = code_block.with_language(lang);
                }
                blocks.push(ContentBlock::Code(code_block));
            }

            Event::Start(Tag::List(first_item)) => {
                flush_text(&mut current_text, &mut blocks);
                in_list = true;
                list_ordered = first_item.is_some();
                list_items.clear();
            }
            Event::End(TagEnd::List(_)) => {
                in_list = false;
                let items = std::mem::take(&mut list_items);
                if !items.is_empty() {
                    if list_ordered {
                        blocks.push(ContentBlock::OrderedList(items));
                    } else {
                        blocks.push(ContentBlock::UnorderedList(items));
                    }
                }
            }

            Event::Start(Tag::Item) => {
                current_list_item.clear();
            }
            Event::End(TagEnd::Item) => {
                let item = std::mem::take(&mut current_list_item).trim().to_string();
                if !item.is_empty() {
                    list_items.push(item);
                }
            }

            Event::Rule => {
                flush_text(&mut current_text, &mut blocks);
                blocks.push(ContentBlock::HorizontalRule);
            }

            Event::Text(text) => {
                if in_code_block {
                    code_content.push_str(&text);
                } else if in_list {
                    current_list_item.push_str(&text);
                } else {
                    current_text.push_str(&text);
                }
            }

            Event::Code(code) => {
                // Inline code - wrap in backticks for display
                if in_list {
                    current_list_item.push('`');
                    current_list_item.push_str(&code);
                    current_list_item.push('`');
                } else {
                    current_text.push('`');
                    current_text.push_str(&code);
                    current_text.push('`');
                }
            }

            Event::SoftBreak | Event::HardBreak => {
                if in_code_block {
                    code_content.push('\n');
                } else if in_list {
                    current_list_item.push(' ');
                } else {
                    current_text.push(' ');
                }
            }

            // Ignore emphasis/strong markers for plain text extraction
            Event::Start(Tag::Emphasis)
            | Event::End(TagEnd::Emphasis)
            | Event::Start(Tag::Strong)
            | Event::End(TagEnd::Strong) => {}

            // Links - extract text only
            Event::Start(Tag::Link { .. }) | Event::End(TagEnd::Link) => {}

            _ => {}
        }
    }

    // Flush any remaining text
    flush_text(&mut current_text, &mut blocks);

    blocks
}

fn flush_text(text: &mut String, blocks: &mut Vec<ContentBlock>) {
    let trimmed = text.trim().to_string();
    if !trimmed.is_empty() {
        blocks.push(ContentBlock::Paragraph(trimmed));
    }
    text.clear();
}

fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_heading() {
        let blocks = parse_markdown_content("# Hello World");
        assert_eq!(blocks.len(), 1);
        assert!(
            matches!(&blocks[0], ContentBlock::Heading { level: 1, text } if text == "Hello World")
        );
    }

    #[test]
    fn parse_multiple_headings() {
        let md = "# H1\n## H2\n### H3";
        let blocks = parse_markdown_content(md);
        assert_eq!(blocks.len(), 3);
        assert!(matches!(&blocks[0], ContentBlock::Heading { level: 1, .. }));
        assert!(matches!(&blocks[1], ContentBlock::Heading { level: 2, .. }));
        assert!(matches!(&blocks[2], ContentBlock::Heading { level: 3, .. }));
    }

    #[test]
    fn parse_paragraph() {
        let blocks = parse_markdown_content("This is a paragraph.");
        assert_eq!(blocks.len(), 1);
        assert!(
            matches!(&blocks[0], ContentBlock::Paragraph(text) if text == "This is a paragraph.")
        );
    }

    #[test]
    fn parse_code_block() {
        let md = "```javascript\nconst x = 5;\n```";
        let blocks = parse_markdown_content(md);
        assert_eq!(blocks.len(), 1);
        if let ContentBlock::Code(code) = &blocks[0] {
            assert_eq!(code.language, Some("javascript".to_string()));
            assert!(code.code.contains("const x = 5;"));
        } else {
            panic!("Expected code block");
        }
    }

    #[test]
    fn parse_code_without_language() {
        let md = "```\nplain code\n```";
        let blocks = parse_markdown_content(md);
        assert_eq!(blocks.len(), 1);
        if let ContentBlock::Code(code) = &blocks[0] {
            assert!(code.language.is_none());
        }
    }

    #[test]
    fn parse_unordered_list() {
        let md = "- Item 1\n- Item 2\n- Item 3";
        let blocks = parse_markdown_content(md);
        assert_eq!(blocks.len(), 1);
        if let ContentBlock::UnorderedList(items) = &blocks[0] {
            assert_eq!(items.len(), 3);
            assert_eq!(items[0], "Item 1");
        } else {
            panic!("Expected unordered list");
        }
    }

    #[test]
    fn parse_ordered_list() {
        let md = "1. First\n2. Second\n3. Third";
        let blocks = parse_markdown_content(md);
        assert_eq!(blocks.len(), 1);
        if let ContentBlock::OrderedList(items) = &blocks[0] {
            assert_eq!(items.len(), 3);
            assert_eq!(items[0], "First");
        } else {
            panic!("Expected ordered list");
        }
    }

    #[test]
    fn parse_horizontal_rule() {
        let blocks = parse_markdown_content("---");
        assert_eq!(blocks.len(), 1);
        assert!(matches!(&blocks[0], ContentBlock::HorizontalRule));
    }

    #[test]
    fn parse_inline_code() {
        let md = "Use `console.log` to print.";
        let blocks = parse_markdown_content(md);
        assert_eq!(blocks.len(), 1);
        if let ContentBlock::Paragraph(text) = &blocks[0] {
            assert!(text.contains("`console.log`"));
        } else {
            panic!("Expected paragraph");
        }
    }

    #[test]
    fn parse_inline_code_in_list() {
        let md = "- Use `let` for variables\n- Use `const` for constants";
        let blocks = parse_markdown_content(md);
        assert_eq!(blocks.len(), 1);
        if let ContentBlock::UnorderedList(items) = &blocks[0] {
            assert!(items[0].contains("`let`"));
            assert!(items[1].contains("`const`"));
        } else {
            panic!("Expected unordered list");
        }
    }

    #[test]
    fn parse_mixed_content() {
        let md = r#"# Title

This is a paragraph.

```javascript
function main() {}
```

- Item 1
- Item 2
"#;
        let blocks = parse_markdown_content(md);
        assert!(blocks.len() >= 4);
        assert!(matches!(&blocks[0], ContentBlock::Heading { level: 1, .. }));
        assert!(matches!(&blocks[1], ContentBlock::Paragraph(_)));
        assert!(matches!(&blocks[2], ContentBlock::Code(_)));
        assert!(matches!(&blocks[3], ContentBlock::UnorderedList(_)));
    }

    #[test]
    fn parse_multiple_paragraphs() {
        let md = "First paragraph.\n\nSecond paragraph.";
        let blocks = parse_markdown_content(md);
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn parse_empty_content() {
        let blocks = parse_markdown_content("");
        assert!(blocks.is_empty());
    }

    #[test]
    fn parse_whitespace_only() {
        let blocks = parse_markdown_content("   \n\n   \n");
        assert!(blocks.is_empty());
    }

    #[test]
    fn soft_break_joins_paragraph_lines() {
        let md = "One line\nand another.";
        let blocks = parse_markdown_content(md);
        assert_eq!(blocks.len(), 1);
        assert!(
            matches!(&blocks[0], ContentBlock::Paragraph(t) if t == "One line and another.")
        );
    }

    #[test]
    fn heading_level_conversion() {
        use pulldown_cmark::HeadingLevel::*;
        assert_eq!(heading_level_to_u8(H1), 1);
        assert_eq!(heading_level_to_u8(H2), 2);
        assert_eq!(heading_level_to_u8(H6), 6);
    }

    #[test]
    fn flush_text_empty() {
        let mut text = String::new();
        let mut blocks = Vec::new();
        flush_text(&mut text, &mut blocks);
        assert!(blocks.is_empty());
    }

    #[test]
    fn flush_text_content() {
        let mut text = "Hello world".to_string();
        let mut blocks = Vec::new();
        flush_text(&mut text, &mut blocks);
        assert_eq!(blocks.len(), 1);
        assert!(matches!(&blocks[0], ContentBlock::Paragraph(t) if t == "Hello world"));
    }
}
