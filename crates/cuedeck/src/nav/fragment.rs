/// Canonical fragment encoding of a cursor position.
pub fn encode(index: usize, step: usize) -> String {
    format!("#{index}.{step}")
}

/// Tolerant decode of a `#<index>.<step>` fragment into a requested
/// position. A missing fragment, a fragment without the leading `#`, or an
/// unparsable component falls back to that component's default (slide 1,
/// step 0). The result is a request, not a cursor: callers clamp it against
/// the deck.
pub fn decode(fragment: Option<&str>) -> (i64, i64) {
    let Some(raw) = fragment else {
        return (1, 0);
    };
    let Some(body) = raw.strip_prefix('#') else {
        return (1, 0);
    };
    let (index, step) = match body.split_once('.') {
        Some((a, b)) => (a, b),
        None => (body, ""),
    };
    (
        index.trim().parse().unwrap_or(1),
        step.trim().parse().unwrap_or(0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_canonical_form() {
        assert_eq!(encode(1, 0), "#1.0");
        assert_eq!(encode(12, 3), "#12.3");
    }

    #[test]
    fn decodes_canonical_form() {
        assert_eq!(decode(Some("#2.1")), (2, 1));
        assert_eq!(decode(Some("#10.0")), (10, 0));
    }

    #[test]
    fn round_trips() {
        for (index, step) in [(1, 0), (3, 2), (99, 7)] {
            assert_eq!(decode(Some(&encode(index, step))), (index as i64, step as i64));
        }
    }

    #[test]
    fn missing_fragment_defaults() {
        assert_eq!(decode(None), (1, 0));
    }

    #[test]
    fn missing_hash_prefix_defaults() {
        assert_eq!(decode(Some("2.1")), (1, 0));
    }

    #[test]
    fn garbage_components_default_independently() {
        assert_eq!(decode(Some("#abc")), (1, 0));
        assert_eq!(decode(Some("#abc.2")), (1, 2));
        assert_eq!(decode(Some("#4.xyz")), (4, 0));
        assert_eq!(decode(Some("#.")), (1, 0));
    }

    #[test]
    fn index_without_step_defaults_step() {
        assert_eq!(decode(Some("#7")), (7, 0));
    }

    #[test]
    fn negative_values_pass_through_for_clamping() {
        assert_eq!(decode(Some("#-3.2")), (-3, 2));
    }
}
