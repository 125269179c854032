//! Text block renderer. Turns a post body or project description into a flat
//! list of display blocks.
//!
//! Exactly three line shapes are recognised: `#` headings, fenced code and
//! plain text. No inline markup, no nesting, no escaping (the templates escape).

use serde::Serialize;

const FENCE: &str = "```";
const MAX_HEADING_LEVEL: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayBlock {
    Heading { level: u8, text: String },
    CodeBlock { text: String },
    Paragraph { text: String },
    Blank,
}

/// Renders `content` line by line. Total: every input yields a block list.
///
/// A fence opens a code block that runs to the next line starting with the
/// fence marker; the language tag on the opening line is dropped. An
/// unterminated fence swallows the rest of the input into one block.
pub fn render(content: &str) -> Vec<DisplayBlock> {
    let mut blocks = Vec::new();
    let mut open_fence: Option<Vec<&str>> = None;

    for raw in content.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if let Some(code) = open_fence.as_mut() {
            if line.starts_with(FENCE) {
                blocks.push(DisplayBlock::CodeBlock {
                    text: code.join("\n"),
                });
                open_fence = None;
            } else {
                code.push(line);
            }
            continue;
        }

        if let Some(after) = line.strip_prefix(FENCE) {
            let mut code = Vec::new();
            let rest = strip_language_tag(after);
            if !rest.is_empty() {
                code.push(rest);
            }
            open_fence = Some(code);
        } else if line.starts_with('#') {
            blocks.push(heading(line));
        } else if line.trim().is_empty() {
            blocks.push(DisplayBlock::Blank);
        } else {
            blocks.push(DisplayBlock::Paragraph {
                text: line.to_string(),
            });
        }
    }

    if let Some(code) = open_fence {
        blocks.push(DisplayBlock::CodeBlock {
            text: code.join("\n"),
        });
    }

    blocks
}

fn heading(line: &str) -> DisplayBlock {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    let text = line[hashes..].trim_start();
    DisplayBlock::Heading {
        level: hashes.min(MAX_HEADING_LEVEL) as u8,
        text: text.to_string(),
    }
}

// "```rust", "```c++ int x;" -> "", "int x;"
fn strip_language_tag(after_fence: &str) -> &str {
    let tag_len = after_fence
        .find(char::is_whitespace)
        .unwrap_or(after_fence.len());
    after_fence[tag_len..].trim()
}
