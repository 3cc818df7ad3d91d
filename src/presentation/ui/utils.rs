use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pads or truncates `text` to exactly `width` terminal columns.
///
/// Truncated text ends with an ellipsis.
#[must_use]
pub fn fit_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        let mut out = text.to_string();
        out.push_str(&" ".repeat(width - text_width));
        return out;
    }

    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Right-aligns `text` in `width` columns.
#[must_use]
pub fn align_right(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    format!("{}{text}", " ".repeat(width - text_width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Lunch", 8, "Lunch   " ; "pads")]
    #[test_case("Lunch", 5, "Lunch" ; "exact")]
    #[test_case("Auditorium Hall", 8, "Auditor…" ; "truncates")]
    #[test_case("Hall", 0, "" ; "zero_width")]
    fn test_fit_to_width(text: &str, width: usize, expected: &str) {
        assert_eq!(fit_to_width(text, width), expected);
    }

    #[test]
    fn test_fit_to_width_counts_wide_chars() {
        let fitted = fit_to_width("会议室会议室", 5);
        assert_eq!(fitted.width(), 5);
        assert!(fitted.starts_with("会议"));
    }

    #[test]
    fn test_align_right() {
        assert_eq!(align_right("$50", 6), "   $50");
        assert_eq!(align_right("$5500", 3), "$5500");
    }
}
