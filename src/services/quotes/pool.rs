use crate::models::quote::Quote;

/// Served when the generator is unavailable or its answer is unusable.
const FALLBACK_QUOTES: &[(&str, &str)] = &[
    ("You do not have to see the whole staircase, just take the first step.", "Martin Luther King Jr."),
    ("Nothing is impossible. The word itself says I'm possible.", "Audrey Hepburn"),
    ("The best way out is always through.", "Robert Frost"),
    ("Act as if what you do makes a difference. It does.", "William James"),
    ("It always seems impossible until it's done.", "Nelson Mandela"),
    ("Keep your face always toward the sunshine, and shadows will fall behind you.", "Walt Whitman"),
    ("What lies behind us and what lies before us are tiny matters compared to what lies within us.", "Ralph Waldo Emerson"),
    ("Happiness depends upon ourselves.", "Aristotle"),
    ("You are never too old to set another goal or to dream a new dream.", "C. S. Lewis"),
    ("Turn your wounds into wisdom.", "Oprah Winfrey"),
    ("No act of kindness, no matter how small, is ever wasted.", "Aesop"),
    ("Believe you can and you're halfway there.", "Theodore Roosevelt"),
    ("The wound is the place where the light enters you.", "Rumi"),
    ("Start where you are. Use what you have. Do what you can.", "Arthur Ashe"),
    ("In the middle of every difficulty lies opportunity.", "Albert Einstein"),
    ("Be gentle with yourself, you're doing the best you can.", "Unknown"),
];

pub fn fallback_pool() -> Vec<Quote> {
    FALLBACK_QUOTES
        .iter()
        .map(|(text, author)| Quote::new(*text, *author))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pool_texts_are_unique() {
        let pool = fallback_pool();
        let texts: HashSet<_> = pool.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts.len(), pool.len());
    }

    #[test]
    fn test_pool_entries_are_complete() {
        assert!(fallback_pool()
            .iter()
            .all(|q| !q.text.trim().is_empty() && !q.author.trim().is_empty()));
    }
}
