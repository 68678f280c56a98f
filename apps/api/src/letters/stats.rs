use serde::Serialize;

/// Size and a rough readability figure for a generated letter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LetterStats {
    pub characters: usize,
    pub words: usize,
    /// 1–10, higher reads easier. Based only on average word length.
    pub readability_score: f64,
}

pub fn letter_stats(text: &str) -> LetterStats {
    let characters = text.chars().count();
    let words = text.split_whitespace().count();

    let readability_score = if words == 0 {
        10.0
    } else {
        let avg_word_length = characters as f64 / words as f64;
        let raw = (10.0 - (avg_word_length - 4.0) * 2.0).clamp(1.0, 10.0);
        (raw * 10.0).round() / 10.0
    };

    LetterStats {
        characters,
        words,
        readability_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let stats = letter_stats("Dear Hiring Manager,\nThanks.");
        assert_eq!(stats.words, 4);
        assert_eq!(stats.characters, 28);
    }

    #[test]
    fn test_counts_unicode_scalars() {
        assert_eq!(letter_stats("• Shipped").characters, 9);
    }

    #[test]
    fn test_short_words_score_high() {
        assert_eq!(letter_stats("a b c d").readability_score, 10.0);
    }

    #[test]
    fn test_long_words_score_low() {
        let stats = letter_stats("internationalization institutionalization");
        assert_eq!(stats.readability_score, 1.0);
    }

    #[test]
    fn test_score_rounded_to_one_decimal() {
        // 23 chars / 3 words = 7.666.. -> 10 - 7.333.. = 2.666.. -> 2.7
        assert_eq!(letter_stats("letters written clearly").readability_score, 2.7);
    }

    #[test]
    fn test_empty_text() {
        let stats = letter_stats("   ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.readability_score, 10.0);
    }
}
