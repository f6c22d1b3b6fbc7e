pub mod blocks;
pub mod sections;

use tracing::debug;

use crate::config::SegmenterConfig;
pub use sections::ContentBlock;

/// Two-pass pipeline: markup → elements → heading-scoped content blocks.
pub fn extract_content_blocks(html: &str, config: &SegmenterConfig) -> Vec<ContentBlock> {
    let elements = blocks::classify_elements(html);
    let content_blocks = sections::cluster_blocks(&elements, config);
    debug!(
        elements = elements.len(),
        blocks = content_blocks.len(),
        "segmented page"
    );
    content_blocks
}
