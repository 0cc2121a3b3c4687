use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Break `text` into lines no wider than `width` columns, splitting only at
/// whitespace. Each `\n` starts a new group of lines. A word wider than
/// `width` is cut at `width`. Blank input yields one empty line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    if text.trim().is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let word = truncate_to_width(word, width);
            if word.is_empty() {
                continue;
            }
            let needed = if current.is_empty() {
                word.width()
            } else {
                current.width() + 1 + word.width()
            };
            if needed > width {
                lines.push(std::mem::take(&mut current));
            } else if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Longest prefix of `s` that fits in `width` columns.
pub fn truncate_to_width(s: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            return &s[..idx];
        }
        used += w;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "Hold regular one-on-ones and take notes you can revisit later.",
        "a bb ccc dddd eeeee ffffff",
        "supercalifragilisticexpialidocious is long",
        "first paragraph\nsecond paragraph here\n\nthird",
        "   leading and   inner   spaces   ",
        "日本語 テキスト の 折り返し",
    ];

    #[test]
    fn blank_input_yields_one_empty_line() {
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("   \n  ", 10), vec![""]);
    }

    #[test]
    fn breaks_at_word_boundaries() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn long_word_is_truncated() {
        assert_eq!(wrap("abcdefghijkl xy", 5), vec!["abcde", "xy"]);
    }

    #[test]
    fn newline_starts_new_group() {
        assert_eq!(wrap("one two\nthree", 20), vec!["one two", "three"]);
    }

    #[test]
    fn zero_width_is_treated_as_one() {
        assert_eq!(wrap("ab c", 0), vec!["a", "c"]);
    }

    #[test]
    fn lines_never_exceed_width() {
        for text in SAMPLES {
            for width in 1..=30 {
                for line in wrap(text, width) {
                    assert!(line.width() <= width, "{line:?} wider than {width}");
                }
            }
        }
    }

    #[test]
    fn words_survive_in_order_when_they_fit() {
        for text in SAMPLES {
            let width = 40;
            let rejoined = wrap(text, width).join(" ");
            let expected: Vec<&str> = text.split_whitespace().collect();
            let actual: Vec<&str> = rejoined.split_whitespace().collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn rewrapping_is_stable() {
        for text in SAMPLES {
            for width in [1, 4, 9, 17, 30] {
                let once = wrap(text, width);
                let twice = wrap(&once.join("\n"), width);
                assert_eq!(once, twice, "{text:?} at {width}");
            }
        }
    }

    #[test]
    fn truncate_respects_wide_characters() {
        assert_eq!(truncate_to_width("日本語", 4), "日本");
        assert_eq!(truncate_to_width("日本語", 5), "日本");
        assert_eq!(truncate_to_width("abc", 10), "abc");
    }
}
