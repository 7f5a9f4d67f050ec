use log::debug;

use crate::parser::{Block, Deck, Inline, ListItem, inlines_to_text};

pub const TAB_REACHABLE: i32 = 0;
pub const TAB_UNREACHABLE: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusKind {
    Link,
    Media,
}

/// One keyboard-focusable element inside a slide.
#[derive(Debug, Clone)]
pub struct FocusTarget {
    pub label: String,
    pub kind: FocusKind,
    /// Disabled targets are skipped by focus updates entirely.
    pub disabled: bool,
    pub tab_index: i32,
}

/// Enforces the single-reachable-slide invariant: at any time, only the
/// focusable elements of the active slide are keyboard-reachable.
#[derive(Debug, Default)]
pub struct FocusController {
    slides: Vec<Vec<FocusTarget>>,
}

impl FocusController {
    /// Collect the focusable elements of every slide: links (a link with an
    /// empty URL is disabled) and media elements that expose native controls.
    pub fn from_deck(deck: &Deck) -> Self {
        let slides = deck
            .slides
            .iter()
            .map(|slide| {
                let mut targets = Vec::new();
                for block in &slide.blocks {
                    collect_block_targets(block, &mut targets);
                }
                if let Some(media) = &slide.media {
                    if media.native_controls {
                        targets.push(FocusTarget {
                            label: media.source.clone(),
                            kind: FocusKind::Media,
                            disabled: false,
                            tab_index: TAB_UNREACHABLE,
                        });
                    }
                }
                targets
            })
            .collect();
        Self { slides }
    }

    /// Make the targets of the slide at `active_index` (1-based) reachable
    /// and every other slide's targets unreachable. Disabled targets are
    /// left untouched.
    pub fn update_focus(&mut self, active_index: usize) {
        for (i, targets) in self.slides.iter_mut().enumerate() {
            let reachable = i + 1 == active_index;
            for target in targets.iter_mut() {
                if target.disabled {
                    continue;
                }
                target.tab_index = if reachable {
                    TAB_REACHABLE
                } else {
                    TAB_UNREACHABLE
                };
            }
        }
        debug!("focus: slide {active_index} reachable");
    }

    pub fn targets(&self, index: usize) -> &[FocusTarget] {
        index
            .checked_sub(1)
            .and_then(|i| self.slides.get(i))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 1-based ordinals of slides with at least one reachable target.
    pub fn reachable_slides(&self) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, targets)| targets.iter().any(|t| t.tab_index == TAB_REACHABLE))
            .map(|(i, _)| i + 1)
            .collect()
    }
}

fn collect_block_targets(block: &Block, out: &mut Vec<FocusTarget>) {
    match block {
        Block::Heading { inlines, .. } | Block::Paragraph { inlines } => {
            collect_inline_targets(inlines, out);
        }
        Block::List { items, .. } => collect_item_targets(items, out),
        Block::CodeBlock { .. } => {}
    }
}

fn collect_item_targets(items: &[ListItem], out: &mut Vec<FocusTarget>) {
    for item in items {
        collect_inline_targets(&item.inlines, out);
        collect_item_targets(&item.children, out);
    }
}

fn collect_inline_targets(inlines: &[Inline], out: &mut Vec<FocusTarget>) {
    for inline in inlines {
        match inline {
            Inline::Link { text, url } => out.push(FocusTarget {
                label: inlines_to_text(text),
                kind: FocusKind::Link,
                disabled: url.is_empty(),
                tab_index: TAB_UNREACHABLE,
            }),
            Inline::Bold(children) | Inline::Italic(children) => {
                collect_inline_targets(children, out);
            }
            Inline::Text(_) | Inline::Code(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    #[test]
    fn links_become_targets() {
        let deck = parser::parse("See [docs](https://example.com)\n\n---\n\n# Plain");
        let focus = FocusController::from_deck(&deck);
        assert_eq!(focus.targets(1).len(), 1);
        assert!(focus.targets(2).is_empty());
    }

    #[test]
    fn empty_url_link_is_disabled() {
        let deck = parser::parse("A [dead]() link");
        let mut focus = FocusController::from_deck(&deck);
        focus.update_focus(1);
        assert!(focus.targets(1)[0].disabled);
        assert_eq!(focus.targets(1)[0].tab_index, TAB_UNREACHABLE);
    }

    #[test]
    fn media_with_controls_is_focusable() {
        let deck = parser::parse("@media: clip.mp4 controls\n# Talk");
        let focus = FocusController::from_deck(&deck);
        assert_eq!(focus.targets(1).len(), 1);
        assert_eq!(focus.targets(1)[0].kind, FocusKind::Media);
    }

    #[test]
    fn media_without_controls_is_not_focusable() {
        let deck = parser::parse("@media: clip.mp4\n# Talk");
        let focus = FocusController::from_deck(&deck);
        assert!(focus.targets(1).is_empty());
    }

    #[test]
    fn only_active_slide_is_reachable() {
        let deck = parser::parse("[a](x)\n\n---\n\n[b](y)\n\n---\n\n[c](z)");
        let mut focus = FocusController::from_deck(&deck);
        focus.update_focus(2);
        assert_eq!(focus.reachable_slides(), vec![2]);
        focus.update_focus(3);
        assert_eq!(focus.reachable_slides(), vec![3]);
    }
}
