use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Conversational filler and platform boilerplate that says nothing about the topic
const STOPWORDS: &[&str] = &[
    "there", "these", "their", "about", "which", "would", "could", "should", "really", "actually",
    "people", "things", "think", "going", "because", "every", "other", "where", "after", "before",
    "right", "through", "while", "even", "under", "again", "more", "make", "what", "then", "into",
    "also", "great", "thanks", "support", "button", "always", "watching", "youtube", "video",
    "channel",
];

pub const DEFAULT_KEYWORD_COUNT: usize = 10;

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\b\w{6,}\b").expect("static word regex is valid"))
}

fn stopwords() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOPWORDS.iter().copied().collect())
}

/// Rank the most frequent long words in `text`.
///
/// Tokens are runs of at least six word characters, lowercased, minus stopwords. Ties
/// keep first-occurrence order.
pub fn extract_keywords(text: &str, count: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stopwords = stopwords();

    let mut order: Vec<&str> = Vec::new();
    let mut frequencies: HashMap<&str, usize> = HashMap::new();

    for word in word_regex().find_iter(&lowered).map(|m| m.as_str()) {
        if stopwords.contains(word) {
            continue;
        }
        let seen = frequencies.entry(word).or_insert(0);
        if *seen == 0 {
            order.push(word);
        }
        *seen += 1;
    }

    // Stable sort keeps first-seen order among equal counts
    order.sort_by(|a, b| frequencies[b].cmp(&frequencies[a]));

    order.into_iter().take(count).map(str::to_string).collect()
}
