use crate::content::block_renderer::render_blocks;
use crate::content::front_matter::serialize_front_matter;
use crate::content::render_error::RenderError;
use crate::content::Document;

/// Parses a JSON content document. A missing field or an unrecognized block
/// `type` fails here, before any rendering starts.
pub fn parse_document(json: &str) -> Result<Document, RenderError> {
    Ok(serde_json::from_str::<Document>(json)?)
}

/// Renders a full MDX post: front matter, one separating blank line, body.
pub fn render_document(doc: &Document) -> Result<String, RenderError> {
    if doc.meta.title.trim().is_empty() {
        return Err(RenderError::EmptyTitle);
    }

    let header = serialize_front_matter(&doc.meta);
    let body = render_blocks(&doc.content)?;

    Ok(format!("{}\n{}", header, body))
}
