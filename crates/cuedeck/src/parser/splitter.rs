use super::is_directive;

/// Split a document body (after frontmatter extraction) into raw slide strings.
///
/// Three mechanisms create slide breaks:
/// 1. A line of three or more dashes
/// 2. Two or more consecutive blank lines
/// 3. A `# ` heading when the current slide already has content
///
/// None of them apply inside fenced code blocks.
pub fn split(body: &str) -> Vec<String> {
    let body = body.replace("\r\n", "\n");

    let mut slides: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut has_content = false;
    let mut blank_run = 0usize;
    let mut fence: Option<Fence> = None;

    for line in body.split('\n') {
        let trimmed = line.trim();

        if let Some(open) = &fence {
            current.push(line.to_string());
            if closes_fence(trimmed, open) {
                fence = None;
            }
            blank_run = 0;
            continue;
        }

        if trimmed.is_empty() {
            blank_run += 1;
            continue;
        }

        // A gap of two or more blank lines ends the slide; shorter gaps are
        // kept as ordinary block separation.
        if blank_run >= 2 && has_content {
            flush(&mut slides, &mut current, &mut has_content);
        } else {
            for _ in 0..blank_run {
                current.push(String::new());
            }
        }
        blank_run = 0;

        if is_dash_separator(trimmed) {
            flush(&mut slides, &mut current, &mut has_content);
            continue;
        }

        // An H1 after existing content starts the next slide. Directives
        // sitting just above it (`@media: X` before `# Heading`) belong to
        // the heading's slide and move with it.
        if line.starts_with("# ") && has_content {
            let carried = take_trailing_directives(&mut current);
            flush(&mut slides, &mut current, &mut has_content);
            current.extend(carried);
        }

        if let Some(open) = opens_fence(trimmed) {
            fence = Some(open);
        }

        current.push(line.to_string());
        if !is_directive(trimmed) {
            has_content = true;
        }
    }

    flush(&mut slides, &mut current, &mut has_content);
    slides
}

struct Fence {
    ch: char,
    len: usize,
}

fn opens_fence(trimmed: &str) -> Option<Fence> {
    let ch = trimmed.chars().next()?;
    if ch != '`' && ch != '~' {
        return None;
    }
    let len = trimmed.chars().take_while(|&c| c == ch).count();
    if len >= 3 { Some(Fence { ch, len }) } else { None }
}

fn closes_fence(trimmed: &str, open: &Fence) -> bool {
    let closing = trimmed.chars().take_while(|&c| c == open.ch).count();
    closing >= open.len && trimmed.chars().skip(closing).all(|c| c.is_whitespace())
}

fn flush(slides: &mut Vec<String>, current: &mut Vec<String>, has_content: &mut bool) {
    let text = current.join("\n").trim().to_string();
    if !text.is_empty() {
        slides.push(text);
    }
    current.clear();
    *has_content = false;
}

/// Pop contiguous trailing directive lines (and blank lines between them)
/// off the accumulated slide, returning the directives in document order.
fn take_trailing_directives(current: &mut Vec<String>) -> Vec<String> {
    let mut split_at = current.len();
    for i in (0..current.len()).rev() {
        let trimmed = current[i].trim();
        if trimmed.is_empty() || is_directive(trimmed) {
            split_at = i;
        } else {
            break;
        }
    }
    current
        .split_off(split_at)
        .into_iter()
        .filter(|l| !l.trim().is_empty())
        .collect()
}

fn is_dash_separator(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_split() {
        let body = "Slide one\n\n\n\nSlide two";
        let slides = split(body);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0], "Slide one");
        assert_eq!(slides[1], "Slide two");
    }

    #[test]
    fn test_single_blank_no_split() {
        let body = "Paragraph one\n\nParagraph two";
        let slides = split(body);
        assert_eq!(slides.len(), 1);
    }

    #[test]
    fn test_dash_separator() {
        let body = "Slide one\n\n---\n\nSlide two";
        let slides = split(body);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0], "Slide one");
        assert_eq!(slides[1], "Slide two");
    }

    #[test]
    fn test_heading_inference() {
        let body = "# First\n\nContent\n\n# Second\n\nMore content";
        let slides = split(body);
        assert_eq!(slides.len(), 2);
        assert!(slides[0].starts_with("# First"));
        assert!(slides[1].starts_with("# Second"));
    }

    #[test]
    fn test_h2_no_split() {
        let body = "# Title\n\n## Subtitle\n\nContent";
        let slides = split(body);
        assert_eq!(slides.len(), 1);
    }

    #[test]
    fn test_heading_inference_first_heading() {
        // First heading shouldn't split (no prior content)
        let body = "# Only Heading\n\nContent here";
        let slides = split(body);
        assert_eq!(slides.len(), 1);
    }

    #[test]
    fn test_combined_separators() {
        let body = "Slide one\n\n\n\n---\n\n\n\nSlide two";
        let slides = split(body);
        // Overlapping separators collapse into a single break
        assert_eq!(slides.len(), 2);
    }

    #[test]
    fn test_directive_before_heading_moves_to_next_slide() {
        let body = "# Title\n\nSubtitle\n\n@media: intro.mp4\n# Second Slide\n\nContent";
        let slides = split(body);
        assert_eq!(slides.len(), 2, "Expected 2 slides, got {}", slides.len());
        assert!(
            !slides[0].contains("@media"),
            "First slide should not contain the directive: {}",
            slides[0]
        );
        assert!(
            slides[1].starts_with("@media: intro.mp4"),
            "Second slide should start with the directive: {}",
            slides[1]
        );
    }

    #[test]
    fn test_heading_in_code_block_no_split() {
        let body = "# Title\n\n```python\n# this is a comment\nprint('hi')\n```";
        let slides = split(body);
        assert_eq!(slides.len(), 1, "Hash comment in code block should not split");
    }

    #[test]
    fn test_dashes_in_code_block_no_split() {
        let body = "# Title\n\n```\nfoo\n---\nbar\n```";
        let slides = split(body);
        assert_eq!(slides.len(), 1, "Dash rule inside code block should not split");
    }

    #[test]
    fn test_blank_lines_in_code_block_no_split() {
        let body = "# Title\n\n```\nfirst\n\n\n\nlast\n```";
        let slides = split(body);
        assert_eq!(slides.len(), 1, "Blank lines inside code block should not split");
    }

    #[test]
    fn test_demo_deck_slide_count() {
        let content = include_str!("../../../../sample-decks/demo.md");
        let (_, body) = super::super::extract_frontmatter(content);
        let slides = split(&body);
        assert!(
            slides.len() >= 6,
            "Expected at least 6 slides, got {}",
            slides.len()
        );
    }
}
