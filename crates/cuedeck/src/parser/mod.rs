pub mod splitter;

#[derive(Debug, Clone)]
pub struct Deck {
    pub meta: DeckMeta,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Default)]
pub struct DeckMeta {
    pub title: Option<String>,
    pub author: Option<String>,
    pub theme: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Slide {
    pub directives: Vec<Directive>,
    pub blocks: Vec<Block>,
    pub media: Option<MediaSource>,
    /// The original raw markdown source text for this slide.
    pub raw_source: String,
}

#[derive(Debug, Clone)]
pub struct Directive {
    pub name: String,
    pub value: String,
}

/// Media attached to a slide via `@media: <source> [controls]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSource {
    pub source: String,
    pub native_controls: bool,
}

#[derive(Debug, Clone)]
pub enum Block {
    Heading { level: u8, inlines: Vec<Inline> },
    Paragraph { inlines: Vec<Inline> },
    List { ordered: bool, items: Vec<ListItem> },
    CodeBlock { language: Option<String>, code: String },
}

#[derive(Debug, Clone)]
pub enum Inline {
    Text(String),
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
    Code(String),
    Link { text: Vec<Inline>, url: String },
}

#[derive(Debug, Clone)]
pub struct ListItem {
    pub marker: ListMarker,
    pub inlines: Vec<Inline>,
    pub children: Vec<ListItem>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListMarker {
    Static,
    Reveal,
    Ordered,
}

pub fn parse(content: &str) -> Deck {
    let (meta, body) = extract_frontmatter(content);
    let slides: Vec<Slide> = splitter::split(&body)
        .into_iter()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| {
            let raw_source = raw.clone();
            let (directives, content) = extract_directives(&raw);
            let blocks = parse_blocks(&content);
            let media = media_from_directives(&directives);
            Slide {
                directives,
                blocks,
                media,
                raw_source,
            }
        })
        .collect();
    Deck { meta, slides }
}

impl Deck {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Reveal-step count of the slide at a 1-based ordinal, recomputed from
    /// the slide's current blocks on every call. Out-of-range ordinals
    /// report zero.
    pub fn incremental_count(&self, index: usize) -> usize {
        index
            .checked_sub(1)
            .and_then(|i| self.slides.get(i))
            .map(|s| s.incremental_count())
            .unwrap_or(0)
    }
}

impl Slide {
    pub fn incremental_count(&self) -> usize {
        count_reveal_steps(&self.blocks)
    }

    /// Display label: first heading, else the opening words of the first
    /// paragraph.
    pub fn title(&self) -> String {
        for block in &self.blocks {
            if let Block::Heading { inlines, .. } = block {
                return inlines_to_text(inlines);
            }
        }
        for block in &self.blocks {
            if let Block::Paragraph { inlines } = block {
                let text = inlines_to_text(inlines);
                let words: Vec<&str> = text.split_whitespace().take(5).collect();
                if !words.is_empty() {
                    return words.join(" ");
                }
            }
        }
        "Untitled".to_string()
    }
}

/// Count the reveal steps in a slide's blocks. Each `+` item in any list
/// (at any nesting depth) is one step.
pub fn count_reveal_steps(blocks: &[Block]) -> usize {
    blocks
        .iter()
        .map(|b| match b {
            Block::List { items, .. } => count_reveal_items(items),
            _ => 0,
        })
        .sum()
}

fn count_reveal_items(items: &[ListItem]) -> usize {
    let mut count = 0;
    for item in items {
        if item.marker == ListMarker::Reveal {
            count += 1;
        }
        count += count_reveal_items(&item.children);
    }
    count
}

/// Extract plain text from inline elements.
pub fn inlines_to_text(inlines: &[Inline]) -> String {
    let mut text = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(s) => text.push_str(s),
            Inline::Bold(children) | Inline::Italic(children) => {
                text.push_str(&inlines_to_text(children));
            }
            Inline::Code(s) => text.push_str(s),
            Inline::Link { text: t, .. } => text.push_str(&inlines_to_text(t)),
        }
    }
    text
}

/// Pull a leading `---` frontmatter block of `key: value` pairs off the
/// document. Anything that doesn't look like frontmatter leaves the content
/// untouched.
pub(crate) fn extract_frontmatter(content: &str) -> (DeckMeta, String) {
    let mut meta = DeckMeta::default();
    let lines: Vec<&str> = content.lines().collect();

    if lines.first().map(|l| l.trim()) != Some("---") {
        return (meta, content.to_string());
    }

    let mut close = None;
    for (i, line) in lines.iter().enumerate().skip(1) {
        let trimmed = line.trim();
        if trimmed == "---" {
            close = Some(i);
            break;
        }
        if !trimmed.is_empty() && !trimmed.contains(':') {
            // Not a key: value line, so this is not frontmatter
            return (meta, content.to_string());
        }
    }
    let Some(close) = close else {
        return (meta, content.to_string());
    };

    for line in &lines[1..close] {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim().to_string();
        match key.trim() {
            "title" => meta.title = Some(value),
            "author" => meta.author = Some(value),
            "theme" => meta.theme = Some(value),
            _ => {}
        }
    }

    let body = lines[close + 1..].join("\n");
    (meta, body)
}

pub(crate) fn is_directive(line: &str) -> bool {
    match (line.strip_prefix('@'), line.find(':')) {
        (Some(_), Some(colon)) if colon > 1 => line[1..colon]
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_'),
        _ => false,
    }
}

/// Separate `@name: value` lines from slide content. Directive syntax inside
/// code fences stays content.
fn extract_directives(raw: &str) -> (Vec<Directive>, String) {
    let mut directives = Vec::new();
    let mut content_lines: Vec<&str> = Vec::new();
    let mut fence: Option<(char, usize)> = None;

    for line in raw.lines() {
        let trimmed = line.trim();

        if let Some((ch, len)) = fence {
            content_lines.push(line);
            let closing = trimmed.chars().take_while(|&c| c == ch).count();
            if closing >= len && trimmed.chars().skip(closing).all(|c| c.is_whitespace()) {
                fence = None;
            }
            continue;
        }

        if is_directive(trimmed) {
            if let Some(colon) = trimmed.find(':') {
                directives.push(Directive {
                    name: trimmed[1..colon].to_string(),
                    value: trimmed[colon + 1..].trim().to_string(),
                });
            }
            continue;
        }

        if let Some(open) = fence_open(trimmed) {
            fence = Some(open);
        }
        content_lines.push(line);
    }

    (directives, content_lines.join("\n"))
}

fn media_from_directives(directives: &[Directive]) -> Option<MediaSource> {
    let directive = directives.iter().find(|d| d.name == "media")?;
    let parts: Vec<&str> = directive.value.split_whitespace().collect();
    match parts.split_last() {
        Some((&"controls", source)) if !source.is_empty() => Some(MediaSource {
            source: source.join(" "),
            native_controls: true,
        }),
        _ if !directive.value.trim().is_empty() => Some(MediaSource {
            source: directive.value.trim().to_string(),
            native_controls: false,
        }),
        _ => None,
    }
}

fn fence_open(trimmed: &str) -> Option<(char, usize)> {
    let ch = trimmed.chars().next()?;
    if ch != '`' && ch != '~' {
        return None;
    }
    let len = trimmed.chars().take_while(|&c| c == ch).count();
    if len >= 3 { Some((ch, len)) } else { None }
}

fn heading_line(trimmed: &str) -> Option<(u8, &str)> {
    let level = trimmed.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    trimmed[level..]
        .strip_prefix(' ')
        .map(|rest| (level as u8, rest.trim()))
}

fn list_item_line(line: &str) -> Option<(usize, ListMarker, &str)> {
    let rest = line.trim_start();
    let indent = line.len() - rest.len();
    if let Some(text) = rest.strip_prefix("- ").or_else(|| rest.strip_prefix("* ")) {
        return Some((indent, ListMarker::Static, text));
    }
    if let Some(text) = rest.strip_prefix("+ ") {
        return Some((indent, ListMarker::Reveal, text));
    }
    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(text) = rest[digits..].strip_prefix(". ") {
            return Some((indent, ListMarker::Ordered, text));
        }
    }
    None
}

fn parse_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let lines: Vec<&str> = content.lines().collect();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        if trimmed.is_empty() {
            i += 1;
            continue;
        }

        if let Some((ch, len)) = fence_open(trimmed) {
            let info = trimmed.trim_start_matches(ch).trim();
            let language = if info.is_empty() {
                None
            } else {
                Some(info.to_string())
            };
            let mut code_lines: Vec<&str> = Vec::new();
            i += 1;
            while i < lines.len() {
                let t = lines[i].trim();
                let closing = t.chars().take_while(|&c| c == ch).count();
                if closing >= len && t.chars().skip(closing).all(|c| c.is_whitespace()) {
                    i += 1;
                    break;
                }
                code_lines.push(lines[i]);
                i += 1;
            }
            blocks.push(Block::CodeBlock {
                language,
                code: code_lines.join("\n"),
            });
            continue;
        }

        if let Some((level, rest)) = heading_line(trimmed) {
            blocks.push(Block::Heading {
                level,
                inlines: parse_inlines(rest),
            });
            i += 1;
            continue;
        }

        if list_item_line(line).is_some() {
            let mut items: Vec<ListItem> = Vec::new();
            let mut ordered = false;
            while i < lines.len() {
                let Some((indent, marker, text)) = list_item_line(lines[i]) else {
                    break;
                };
                if items.is_empty() {
                    ordered = marker == ListMarker::Ordered;
                }
                let item = ListItem {
                    marker,
                    inlines: parse_inlines(text),
                    children: Vec::new(),
                };
                if indent > 0 {
                    // Indented item nests under the latest top-level item
                    match items.last_mut() {
                        Some(parent) => parent.children.push(item),
                        None => items.push(item),
                    }
                } else {
                    items.push(item);
                }
                i += 1;
            }
            blocks.push(Block::List { ordered, items });
            continue;
        }

        let mut para: Vec<&str> = vec![trimmed];
        i += 1;
        while i < lines.len() {
            let t = lines[i].trim();
            if t.is_empty()
                || heading_line(t).is_some()
                || list_item_line(lines[i]).is_some()
                || fence_open(t).is_some()
            {
                break;
            }
            para.push(t);
            i += 1;
        }
        blocks.push(Block::Paragraph {
            inlines: parse_inlines(&para.join(" ")),
        });
    }

    blocks
}

fn parse_inlines(text: &str) -> Vec<Inline> {
    let chars: Vec<char> = text.chars().collect();
    let mut out: Vec<Inline> = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '`' => match find_char(&chars, i + 1, '`') {
                Some(end) => {
                    flush_text(&mut out, &mut plain);
                    out.push(Inline::Code(chars[i + 1..end].iter().collect()));
                    i = end + 1;
                }
                None => {
                    plain.push('`');
                    i += 1;
                }
            },
            '*' if chars.get(i + 1) == Some(&'*') => match find_pair(&chars, i + 2) {
                Some(end) => {
                    flush_text(&mut out, &mut plain);
                    let inner: String = chars[i + 2..end].iter().collect();
                    out.push(Inline::Bold(parse_inlines(&inner)));
                    i = end + 2;
                }
                None => {
                    plain.push_str("**");
                    i += 2;
                }
            },
            '*' => match find_char(&chars, i + 1, '*') {
                Some(end) => {
                    flush_text(&mut out, &mut plain);
                    let inner: String = chars[i + 1..end].iter().collect();
                    out.push(Inline::Italic(parse_inlines(&inner)));
                    i = end + 1;
                }
                None => {
                    plain.push('*');
                    i += 1;
                }
            },
            '[' => match find_link(&chars, i) {
                Some((text_end, url_end)) => {
                    flush_text(&mut out, &mut plain);
                    let label: String = chars[i + 1..text_end].iter().collect();
                    let url: String = chars[text_end + 2..url_end].iter().collect();
                    out.push(Inline::Link {
                        text: parse_inlines(&label),
                        url: url.trim().to_string(),
                    });
                    i = url_end + 1;
                }
                None => {
                    plain.push('[');
                    i += 1;
                }
            },
            c => {
                plain.push(c);
                i += 1;
            }
        }
    }

    flush_text(&mut out, &mut plain);
    out
}

fn flush_text(out: &mut Vec<Inline>, plain: &mut String) {
    if !plain.is_empty() {
        out.push(Inline::Text(std::mem::take(plain)));
    }
}

fn find_char(chars: &[char], from: usize, ch: char) -> Option<usize> {
    (from..chars.len()).find(|&i| chars[i] == ch)
}

fn find_pair(chars: &[char], from: usize) -> Option<usize> {
    (from..chars.len().saturating_sub(1)).find(|&i| chars[i] == '*' && chars[i + 1] == '*')
}

/// Locate `[text](url)` starting at `open`; returns the indexes of `]` and `)`.
fn find_link(chars: &[char], open: usize) -> Option<(usize, usize)> {
    let text_end = find_char(chars, open + 1, ']')?;
    if chars.get(text_end + 1) != Some(&'(') {
        return None;
    }
    let url_end = find_char(chars, text_end + 2, ')')?;
    Some((text_end, url_end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_deck_parses() {
        let content = include_str!("../../../../sample-decks/demo.md");
        let deck = parse(content);
        assert_eq!(deck.meta.theme.as_deref(), Some("dark"));
        assert!(deck.meta.title.is_some());
        assert!(
            deck.len() >= 6,
            "Expected at least 6 slides, got {}",
            deck.len()
        );
    }

    #[test]
    fn test_reveal_step_counting() {
        let content = "# Points\n\n- always shown\n+ first reveal\n+ second reveal";
        let deck = parse(content);
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.incremental_count(1), 2);
    }

    #[test]
    fn test_nested_reveal_steps_counted() {
        let content = "# Points\n\n+ outer\n  + inner\n- static";
        let deck = parse(content);
        assert_eq!(deck.incremental_count(1), 2);
    }

    #[test]
    fn test_incremental_count_out_of_range() {
        let deck = parse("# One");
        assert_eq!(deck.incremental_count(0), 0);
        assert_eq!(deck.incremental_count(99), 0);
    }

    #[test]
    fn test_link_parsing() {
        let content = "See [the docs](https://example.com) for more.";
        let deck = parse(content);
        let Block::Paragraph { inlines } = &deck.slides[0].blocks[0] else {
            panic!("expected paragraph");
        };
        assert!(inlines.iter().any(|i| matches!(
            i,
            Inline::Link { url, .. } if url == "https://example.com"
        )));
    }

    #[test]
    fn test_empty_url_link() {
        let content = "A [dead link]() here.";
        let deck = parse(content);
        let Block::Paragraph { inlines } = &deck.slides[0].blocks[0] else {
            panic!("expected paragraph");
        };
        assert!(
            inlines
                .iter()
                .any(|i| matches!(i, Inline::Link { url, .. } if url.is_empty()))
        );
    }

    #[test]
    fn test_media_directive() {
        let content = "@media: intro.mp4\n# Title";
        let deck = parse(content);
        let media = deck.slides[0].media.as_ref().expect("media attached");
        assert_eq!(media.source, "intro.mp4");
        assert!(!media.native_controls);
    }

    #[test]
    fn test_media_directive_with_controls() {
        let content = "@media: talk clip.mp4 controls\n# Title";
        let deck = parse(content);
        let media = deck.slides[0].media.as_ref().expect("media attached");
        assert_eq!(media.source, "talk clip.mp4");
        assert!(media.native_controls);
    }

    #[test]
    fn test_frontmatter() {
        let content = "---\ntitle: My Deck\nauthor: Someone\ntheme: light\n---\n# Hello";
        let deck = parse(content);
        assert_eq!(deck.meta.title.as_deref(), Some("My Deck"));
        assert_eq!(deck.meta.author.as_deref(), Some("Someone"));
        assert_eq!(deck.meta.theme.as_deref(), Some("light"));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just a slide";
        let deck = parse(content);
        assert!(deck.meta.title.is_none());
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_code_block() {
        let content = "# Code\n\n```rust\nfn main() {}\n```";
        let deck = parse(content);
        assert!(deck.slides[0].blocks.iter().any(|b| matches!(
            b,
            Block::CodeBlock { language: Some(l), code } if l == "rust" && code == "fn main() {}"
        )));
    }

    #[test]
    fn test_ordered_list() {
        let content = "1. first\n2. second";
        let deck = parse(content);
        let Block::List { ordered, items } = &deck.slides[0].blocks[0] else {
            panic!("expected list");
        };
        assert!(ordered);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].marker, ListMarker::Ordered);
    }

    #[test]
    fn test_bold_italic_code_inlines() {
        let content = "Mix of **bold** and *italic* and `code` here.";
        let deck = parse(content);
        let Block::Paragraph { inlines } = &deck.slides[0].blocks[0] else {
            panic!("expected paragraph");
        };
        assert!(inlines.iter().any(|i| matches!(i, Inline::Bold(_))));
        assert!(inlines.iter().any(|i| matches!(i, Inline::Italic(_))));
        assert!(inlines.iter().any(|i| matches!(i, Inline::Code(_))));
    }

    #[test]
    fn test_unterminated_markers_stay_text() {
        let content = "An unclosed star and a [bracket without target.";
        let deck = parse(content);
        let Block::Paragraph { inlines } = &deck.slides[0].blocks[0] else {
            panic!("expected paragraph");
        };
        assert!(
            inlines.iter().all(|i| matches!(i, Inline::Text(_))),
            "unterminated markers should fall back to text"
        );
    }

    #[test]
    fn test_directive_extraction() {
        let content = "@media: a.mp4\n@note: hello\n# Title";
        let deck = parse(content);
        assert_eq!(deck.slides[0].directives.len(), 2);
        assert_eq!(deck.slides[0].directives[1].name, "note");
        assert_eq!(deck.slides[0].directives[1].value, "hello");
    }

    #[test]
    fn test_directive_syntax_in_code_block_kept() {
        let content = "# T\n\n```\n@media: fake.mp4\n```";
        let deck = parse(content);
        assert!(deck.slides[0].media.is_none());
        assert!(
            deck.slides[0]
                .blocks
                .iter()
                .any(|b| matches!(b, Block::CodeBlock { code, .. } if code.contains("@media")))
        );
    }

    #[test]
    fn test_slide_title() {
        let deck = parse("# The Heading\n\nBody text");
        assert_eq!(deck.slides[0].title(), "The Heading");
        let deck = parse("just some opening words running on and on");
        assert_eq!(deck.slides[0].title(), "just some opening words running");
    }
}
