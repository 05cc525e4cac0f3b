use serde::Deserialize;

pub mod block_renderer;
pub mod front_matter;
pub mod mdx_renderer;
pub mod render_error;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub image: String,
    pub published_at: String,
    pub updated_at: String,
    pub author: String,
    pub is_published: bool,
    pub tags: Vec<String>,
}

/// One body block of a post. The `type` tag in the JSON document selects
/// the variant; an unknown tag fails deserialization instead of being
/// silently dropped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph { text: String },
    Blockquote { text: String },
    CodeBlock { language: String, code: String },
    Heading { level: u8, text: String },
    List { items: Vec<String> },
    Link { text: String, href: String },
    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    pub meta: Metadata,
    pub content: Vec<ContentBlock>,
}
