use serde::{Deserialize, Serialize};

use super::blocks::Element;
use crate::config::SegmenterConfig;
use crate::scoring::passage::word_count;

/// A heading-scoped span of body text; the unit that gets scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub heading: Option<String>,
    pub content: String,
}

/// Group body elements under their nearest preceding heading.
///
/// Short body elements never join a block, and blocks under the word floor
/// are dropped rather than merged into their neighbours.
pub fn cluster_blocks(elements: &[Element], config: &SegmenterConfig) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    let mut current_heading = config.default_heading.clone();
    let mut paragraphs: Vec<&str> = Vec::new();

    for element in elements {
        match element {
            Element::Heading(text) => {
                flush(&mut blocks, &current_heading, &mut paragraphs, config);
                current_heading = text.clone();
            }
            Element::Body(text) => {
                if word_count(text) >= config.min_element_words {
                    paragraphs.push(text);
                }
            }
        }
    }
    flush(&mut blocks, &current_heading, &mut paragraphs, config);

    blocks
}

fn flush(
    blocks: &mut Vec<ContentBlock>,
    heading: &str,
    paragraphs: &mut Vec<&str>,
    config: &SegmenterConfig,
) {
    if paragraphs.is_empty() {
        return;
    }
    let content = paragraphs.join(" ");
    paragraphs.clear();
    if word_count(&content) >= config.min_block_words {
        blocks.push(ContentBlock {
            heading: Some(heading.to_string()),
            content,
        });
    }
}
