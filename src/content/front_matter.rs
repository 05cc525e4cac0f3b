use std::fmt::Write;

use crate::content::Metadata;

/// Serializes the front matter block. Field order is fixed and every key is
/// emitted even when its value is empty, so downstream MDX tooling always
/// finds the full schema. Embedded double quotes are not escaped.
pub fn serialize_front_matter(meta: &Metadata) -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf, "title: \"{}\"", meta.title);
    let _ = writeln!(&mut buf, "description: \"{}\"", meta.description);
    let _ = writeln!(&mut buf, "image: \"{}\"", meta.image);
    let _ = writeln!(&mut buf, "publishedAt: \"{}\"", meta.published_at);
    let _ = writeln!(&mut buf, "updatedAt: \"{}\"", meta.updated_at);
    let _ = writeln!(&mut buf, "author: \"{}\"", meta.author);
    let _ = writeln!(&mut buf, "isPublished: {}", meta.is_published);
    let _ = writeln!(&mut buf, "tags:");
    for tag in &meta.tags {
        let _ = writeln!(&mut buf, "  - {}", tag);
    }
    let _ = writeln!(&mut buf, "---");

    buf
}
