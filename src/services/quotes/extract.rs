//! Quote/author extraction from unstructured generated text.
//!
//! The generator is asked for one quote with its author but answers in
//! whatever shape it likes. Each matcher below recognises one shape; they run
//! in priority order and the first that yields a non-empty quote and author
//! wins. Nothing here fails: text that matches no shape becomes a quote by
//! "Unknown".

use std::sync::LazyLock;

use regex::Regex;

use crate::models::quote::{Quote, UNKNOWN_AUTHOR};

type Matcher = fn(&str) -> Option<Quote>;

/// Ordered by precision. Reordering changes results.
const MATCHERS: &[(&str, Matcher)] = &[
    ("emphasis", emphasized_author as Matcher),
    ("dash", dash_separated as Matcher),
    ("quoted", quoted_attribution as Matcher),
    ("by_from", by_or_from as Matcher),
    ("sentence", sentence_boundary as Matcher),
    ("trailing_line", trailing_line as Matcher),
    ("last_hyphen", last_hyphen as Matcher),
];

const DOUBLE_MARKS: &[char] = &['"', '“', '”', '«', '»', '„'];
/// Single marks double as apostrophes, so they are only stripped in pairs.
const SINGLE_OPEN: &[char] = &['\'', '‘'];
const SINGLE_CLOSE: &[char] = &['\'', '’'];
const EMPHASIS_MARKS: &[&str] = &["**", "__", "*", "_"];
const TERMINATORS: &[char] = &['.', '!', '?'];

/// Longest line still treated as an attribution.
const MAX_AUTHOR_LINE_CHARS: usize = 50;

static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?P<quote>.*?[^\s*_].*?)[\s\-–—~]*(?:\*{1,2}|_{1,2})(?P<author>[^*_\n]+?)(?:\*{1,2}|_{1,2})\s*$")
        .expect("emphasis pattern")
});

static DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[-–—]+\s*|[–—]+\s*").expect("dash pattern"));

static QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)^["“'‘«](?P<quote>.+?)["”'’»]\s*[-–—~]+\s*(?P<author>.+)$"#)
        .expect("quoted pattern")
});

static BY_FROM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^(?P<quote>.+)\s+(?:by|from)\s+(?P<author>.+)$").expect("by/from pattern")
});

static SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?P<quote>.+?[.!?])\s+(?P<author>.+)$").expect("sentence pattern")
});

pub fn extract(raw: &str) -> Quote {
    let text = raw.trim();

    for (name, matcher) in MATCHERS {
        if let Some(found) = matcher(text).map(clean) {
            if !found.text.is_empty() && !found.author.is_empty() {
                tracing::debug!(matcher = *name, author = %found.author, "Extracted quote");
                return found;
            }
        }
    }

    tracing::debug!("No attribution found in generated text");
    clean(Quote::new(text, UNKNOWN_AUTHOR))
}

fn clean(quote: Quote) -> Quote {
    Quote {
        text: unwrap_quote(&quote.text).to_string(),
        author: quote.author.trim().to_string(),
    }
}

/// Peel quotation marks and whole-body emphasis off the quote, outermost first.
fn unwrap_quote(text: &str) -> &str {
    let mut text = text.trim();
    loop {
        let before = text.len();

        text = text.trim_matches(DOUBLE_MARKS).trim();
        if let Some(inner) = text
            .strip_prefix(SINGLE_OPEN)
            .and_then(|t| t.strip_suffix(SINGLE_CLOSE))
        {
            text = inner.trim();
        }
        let current = text;
        if let Some(inner) = EMPHASIS_MARKS.iter().find_map(|&m| {
            current.strip_prefix(m)?
                .strip_suffix(m)
                .filter(|inner| !inner.is_empty() && !inner.contains(m))
        }) {
            text = inner.trim();
        }

        if text.len() == before {
            return text;
        }
    }
}

fn captures(re: &Regex, text: &str) -> Option<Quote> {
    let caps = re.captures(text)?;
    Some(Quote::new(&caps["quote"], &caps["author"]))
}

/// `Stay strong. **Maya Angelou**`
fn emphasized_author(text: &str) -> Option<Quote> {
    captures(&EMPHASIS, text)
}

/// `Quote - Author`, `Quote – Author`, `Quote—Author`; split at the last one.
fn dash_separated(text: &str) -> Option<Quote> {
    let sep = DASH.find_iter(text).last()?;
    Some(Quote::new(&text[..sep.start()], &text[sep.end()..]))
}

/// `"Quote"-Author`, `“Quote” ~ Author`
fn quoted_attribution(text: &str) -> Option<Quote> {
    captures(&QUOTED, text)
}

/// `Quote by Author`, `Quote from Author`; split at the last keyword.
fn by_or_from(text: &str) -> Option<Quote> {
    captures(&BY_FROM, text)
}

/// `Quote. Author`: everything after the first sentence is the author. Low
/// precision, so it runs after every explicit attribution shape.
fn sentence_boundary(text: &str) -> Option<Quote> {
    captures(&SENTENCE, text)
}

/// A short final line without terminal punctuation is the author.
fn trailing_line(text: &str) -> Option<Quote> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let (last, body) = lines.split_last()?;
    if body.is_empty()
        || last.chars().count() >= MAX_AUTHOR_LINE_CHARS
        || last.ends_with(TERMINATORS)
    {
        return None;
    }

    let author = last.trim_start_matches(['-', '–', '—', '~', ' ']);
    Some(Quote::new(body.join(" "), author))
}

fn last_hyphen(text: &str) -> Option<Quote> {
    let idx = text.rfind('-')?;
    Some(Quote::new(&text[..idx], &text[idx + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(text: &str, author: &str) -> Quote {
        Quote::new(text, author)
    }

    // ── extract ──────────────────────────────────────────────────────────

    #[test]
    fn test_emphasis_author() {
        assert_eq!(
            extract("Stay strong. **Maya Angelou**"),
            pair("Stay strong.", "Maya Angelou")
        );
    }

    #[test]
    fn test_plain_text_falls_back_to_unknown() {
        assert_eq!(
            extract("No patterns here just text"),
            pair("No patterns here just text", "Unknown")
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract(""), pair("", "Unknown"));
        assert_eq!(extract("   \n  "), pair("", "Unknown"));
    }

    #[test]
    fn test_fallback_strips_quote_marks() {
        assert_eq!(extract("\"Just breathe\""), pair("Just breathe", "Unknown"));
    }

    #[test]
    fn test_fully_bolded_reply_has_no_author() {
        assert_eq!(
            extract("**Believe in yourself.**"),
            pair("Believe in yourself.", "Unknown")
        );
    }

    #[test]
    fn test_italic_quote_with_bold_author() {
        assert_eq!(
            extract("*Believe.* **Anon**"),
            pair("Believe.", "Anon")
        );
    }

    #[test]
    fn test_bold_quote_with_dash_author() {
        assert_eq!(
            extract("**Progress, not perfection.** - Anon"),
            pair("Progress, not perfection.", "Anon")
        );
    }

    #[test]
    fn test_underscore_author() {
        assert_eq!(extract("Keep going. _Anon_"), pair("Keep going.", "Anon"));
        assert_eq!(
            extract("Keep going. __Maya Angelou__"),
            pair("Keep going.", "Maya Angelou")
        );
    }

    #[test]
    fn test_apostrophes_survive_cleanup() {
        assert_eq!(
            extract("'Tis the season to rest - Anon"),
            pair("'Tis the season to rest", "Anon")
        );
        assert_eq!(
            extract("Keep on rockin' - Neil Young"),
            pair("Keep on rockin'", "Neil Young")
        );
    }

    #[test]
    fn test_paired_single_quotes_are_stripped() {
        assert_eq!(extract("'Just breathe'"), pair("Just breathe", "Unknown"));
        assert_eq!(
            extract("‘Rest is productive.’ - Anon"),
            pair("Rest is productive.", "Anon")
        );
    }

    #[test]
    fn test_emphasis_wins_over_dash() {
        assert_eq!(
            extract("Rest - then rise. **Anonymous**"),
            pair("Rest - then rise.", "Anonymous")
        );
    }

    #[test]
    fn test_emphasis_with_dash_prefix_and_quotes() {
        assert_eq!(
            extract("\"You are enough.\" — *Unknown Poet*"),
            pair("You are enough.", "Unknown Poet")
        );
    }

    #[test]
    fn test_dash_with_quotes_stripped() {
        assert_eq!(
            extract("\"The best way out is always through.\" - Robert Frost"),
            pair("The best way out is always through.", "Robert Frost")
        );
    }

    #[test]
    fn test_dash_splits_at_last_separator() {
        assert_eq!(
            extract("Life - it goes on - Robert Frost"),
            pair("Life - it goes on", "Robert Frost")
        );
    }

    #[test]
    fn test_bare_em_dash() {
        assert_eq!(
            extract("“Act as if what you do makes a difference.”—William James"),
            pair("Act as if what you do makes a difference.", "William James")
        );
    }

    #[test]
    fn test_quoted_with_tight_hyphen() {
        assert_eq!(extract("\"Keep going\"-Anon"), pair("Keep going", "Anon"));
    }

    #[test]
    fn test_by_keyword_case_insensitive() {
        assert_eq!(
            extract("Happiness depends upon ourselves BY Aristotle"),
            pair("Happiness depends upon ourselves", "Aristotle")
        );
    }

    #[test]
    fn test_from_keyword() {
        assert_eq!(
            extract("Turn your wounds into wisdom from Oprah Winfrey"),
            pair("Turn your wounds into wisdom", "Oprah Winfrey")
        );
    }

    #[test]
    fn test_sentence_boundary() {
        assert_eq!(
            extract("Stay strong. Maya Angelou"),
            pair("Stay strong.", "Maya Angelou")
        );
    }

    #[test]
    fn test_second_sentence_becomes_author() {
        assert_eq!(extract("Be kind. Be brave."), pair("Be kind.", "Be brave."));
    }

    #[test]
    fn test_trailing_line_author() {
        assert_eq!(
            extract("Be the change that you wish to see in the world\nMahatma Gandhi"),
            pair("Be the change that you wish to see in the world", "Mahatma Gandhi")
        );
    }

    #[test]
    fn test_trailing_line_joins_body_lines() {
        assert_eq!(
            extract("Small steps\nevery day\n\n  ~ Anon  "),
            pair("Small steps every day", "Anon")
        );
    }

    #[test]
    fn test_long_last_line_is_not_an_author() {
        let text = "Keep going\nbecause every single day is another chance to begin again";
        assert_eq!(extract(text).author, "Unknown");
    }

    #[test]
    fn test_last_hyphen_fallback() {
        assert_eq!(extract("Keep moving-Anon"), pair("Keep moving", "Anon"));
    }

    #[test]
    fn test_trailing_hyphen_without_author_is_ignored() {
        assert_eq!(extract("Keep moving-"), pair("Keep moving-", "Unknown"));
    }

    // ── individual matchers ──────────────────────────────────────────────

    #[test]
    fn test_emphasis_requires_trailing_marker() {
        assert!(emphasized_author("**Bold start** then text").is_none());
    }

    #[test]
    fn test_emphasis_ignores_fully_marked_text() {
        assert!(emphasized_author("**Believe in yourself.**").is_none());
        assert!(emphasized_author("_Believe in yourself._").is_none());
    }

    #[test]
    fn test_emphasis_marker_variants() {
        for text in [
            "Be still. *Lao Tzu*",
            "Be still. **Lao Tzu**",
            "Be still. _Lao Tzu_",
            "Be still. __Lao Tzu__",
        ] {
            let found = emphasized_author(text).unwrap();
            assert_eq!(found.text, "Be still.", "{text}");
            assert_eq!(found.author, "Lao Tzu", "{text}");
        }
    }

    #[test]
    fn test_emphasis_keeps_markers_in_quote_body() {
        let found = emphasized_author("*Believe.* **Anon**").unwrap();
        assert_eq!(found.text, "*Believe.*");
        assert_eq!(found.author, "Anon");
    }

    #[test]
    fn test_unwrap_quote_leaves_inner_emphasis() {
        assert_eq!(unwrap_quote("*Be* bold, be *kind*"), "*Be* bold, be *kind*");
        assert_eq!(unwrap_quote("\"**Rise.**\""), "Rise.");
        assert_eq!(unwrap_quote("**"), "**");
    }

    #[test]
    fn test_sentence_boundary_takes_first_terminator() {
        let found = sentence_boundary("One. Two. Three").unwrap();
        assert_eq!(found.text, "One.");
        assert_eq!(found.author, "Two. Three");
    }

    #[test]
    fn test_dash_ignores_intra_word_hyphen() {
        assert!(dash_separated("Well-being matters").is_none());
    }

    #[test]
    fn test_quoted_requires_leading_mark() {
        assert!(quoted_attribution("Keep going\"-Anon").is_none());
    }

    #[test]
    fn test_by_or_from_uses_last_keyword() {
        let found = by_or_from("Made by hand from the heart by Anon").unwrap();
        assert_eq!(found.author, "Anon");
    }

    #[test]
    fn test_trailing_line_needs_two_lines() {
        assert!(trailing_line("Only one line").is_none());
    }

    #[test]
    fn test_trailing_line_rejects_punctuated_last_line() {
        assert!(trailing_line("First line\nSecond line.").is_none());
    }
}
