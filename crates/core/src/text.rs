//! Naive text heuristics: sentence-truncation "summaries" and longest-word
//! keyword extraction. Pure functions, no shared state, no real NLP.

/// Words this short are never treated as topics.
const MIN_TOPIC_LEN: usize = 4;

/// Maximum number of topics returned by [`extract_topics`].
const TOPIC_LIMIT: usize = 6;

/// Returns the first `max_sentences` sentences of `text`, joined by single
/// spaces.
///
/// A sentence boundary is one of `.`, `!`, `?` followed by whitespace;
/// newlines are treated as spaces first. This is truncation by sentence
/// count, not summarization. Empty input yields an empty string.
#[must_use]
pub fn summarize(text: &str, max_sentences: usize) -> String {
    if max_sentences == 0 {
        return String::new();
    }

    let chars: Vec<char> = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    let mut sentences: Vec<String> = Vec::new();
    let mut buf = String::new();

    for (i, &c) in chars.iter().enumerate() {
        buf.push(c);
        let at_boundary = matches!(c, '.' | '!' | '?')
            && chars.get(i + 1).is_some_and(|next| next.is_whitespace());
        if at_boundary {
            let sentence = buf.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_owned());
            }
            buf.clear();
            if sentences.len() == max_sentences {
                break;
            }
        }
    }

    if sentences.len() < max_sentences {
        let tail = buf.trim();
        if !tail.is_empty() {
            sentences.push(tail.to_owned());
        }
    }

    sentences.join(" ")
}

/// Extracts up to six keywords: the longest distinct words of `text`.
///
/// Lowercases, treats every non-alphanumeric character as a separator, keeps
/// words longer than three characters, and sorts by descending length. The
/// sort is stable, so equally long words stay in first-seen order. Empty
/// input yields an empty list.
#[must_use]
pub fn extract_topics(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();

    let mut topics: Vec<String> = Vec::new();
    for word in cleaned.split_whitespace() {
        if word.len() >= MIN_TOPIC_LEN && !topics.iter().any(|t| t == word) {
            topics.push(word.to_owned());
        }
    }

    topics.sort_by_key(|w| std::cmp::Reverse(w.len()));
    topics.truncate(TOPIC_LIMIT);
    topics
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_empty_input() {
        assert_eq!(summarize("", 4), "");
        assert_eq!(summarize("   ", 4), "");
    }

    #[test]
    fn summarize_keeps_first_sentences() {
        let text = "First point. Second point! Third point? Fourth point.";
        assert_eq!(summarize(text, 2), "First point. Second point!");
        assert_eq!(summarize(text, 3), "First point. Second point! Third point?");
    }

    #[test]
    fn summarize_returns_everything_when_short() {
        let text = "Only one sentence here.";
        assert_eq!(summarize(text, 4), "Only one sentence here.");
    }

    #[test]
    fn summarize_flattens_newlines() {
        let text = "Line one continues\nhere. Line two.";
        assert_eq!(summarize(text, 1), "Line one continues here.");
    }

    #[test]
    fn summarize_does_not_split_mid_token() {
        // no whitespace after the dot, so "2.5" is not a boundary
        let text = "The value is 2.5 exactly. Next sentence.";
        assert_eq!(summarize(text, 1), "The value is 2.5 exactly.");
    }

    #[test]
    fn topics_empty_input() {
        assert!(extract_topics("").is_empty());
    }

    #[test]
    fn topics_drop_short_words_and_sort_by_length() {
        let topics = extract_topics("the quick brown fox jumps over the lazy dog");
        // "the", "fox", "dog" are too short; longest words come first
        assert_eq!(topics, vec!["quick", "brown", "jumps", "over", "lazy"]);
    }

    #[test]
    fn topics_deduplicate_and_cap_at_six() {
        let topics =
            extract_topics("alpha beta gamma delta epsilon zeta theta alpha beta gamma");
        assert_eq!(topics.len(), 6);
        assert_eq!(topics[0], "epsilon");
    }

    #[test]
    fn topics_strip_punctuation() {
        let topics = extract_topics("Supply-and-demand curves; elasticity!");
        assert_eq!(topics, vec!["elasticity", "supply", "demand", "curves"]);
    }

    #[test]
    fn topics_tie_break_keeps_first_seen_order() {
        let topics = extract_topics("zzzz aaaa bbbb");
        assert_eq!(topics, vec!["zzzz", "aaaa", "bbbb"]);
    }
}
