/// Builds the directory or file name for a post from its title: lowercase,
/// spaces become hyphens, anything that is not alphanumeric is dropped and
/// accented characters are transliterated to plain ASCII.
pub fn slug_from_title(title: &str) -> String {
    let alpha_chars: String = title.chars()
        .filter(|&c| c.is_alphanumeric() || c == ' ')
        .map(|c| if c == ' ' { '-' } else { c })
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let mut slug = String::new();
    let mut prev_char = None;

    for c in alpha_chars.chars() {
        if c != '-' || prev_char != Some('-') {
            slug.push(c);
        }
        prev_char = Some(c);
    }

    let slug = unidecode::unidecode(slug.trim_matches('-'));

    slug
}
