use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Unigrams shorter than this are dropped.
pub const MIN_TERM_LEN: usize = 3;

lazy_static! {
    static ref NOISE: Regex = Regex::new(r"[^a-z0-9\s]").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            // english
            "about","above","after","again","against","all","also","and","any","are","because","been","before","being",
            "below","between","both","but","can","could","did","does","doing","down","during","each","few","for","from",
            "further","had","has","have","having","her","here","hers","him","his","how","into","its","itself","more",
            "most","nor","not","off","once","only","other","our","ours","out","over","own","same","she","should","some",
            "such","than","that","the","their","theirs","them","then","there","these","they","this","those","through",
            "too","under","until","very","was","were","what","when","where","which","while","who","whom","why","will",
            "with","would","you","your","yours","along","within","using","via","say",
            // academic filler
            "introduction","introductory","intro","fundamentals","fundamental","foundations","foundation","principles",
            "concepts","design","designing","analysis","topics","include","includes","including","course","courses",
            "students","student","study","studies","systems","basic","basics","overview","provides","focuses","focus",
            "various","based","advanced","applied","continuation",
        ];
        words.iter().copied().collect()
    };
}

pub fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// Lowercase, strip everything outside `[a-z0-9]` and whitespace, and keep the
/// unigrams that survive the length and stop-word filters, in order.
pub fn unigrams(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    let cleaned = NOISE.replace_all(&normalized, "");
    cleaned
        .split_whitespace()
        .filter(|t| t.len() >= MIN_TERM_LEN && !is_stopword(t))
        .map(str::to_string)
        .collect()
}

/// Tokenize text into filtered unigrams followed by the bigrams of adjacent
/// retained unigrams. Duplicates are kept so callers can count frequencies.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut terms = unigrams(text);
    let bigrams: Vec<String> = terms.windows(2).map(|w| format!("{} {}", w[0], w[1])).collect();
    terms.extend(bigrams);
    terms
}
