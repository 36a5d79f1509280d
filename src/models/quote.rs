use serde::{Deserialize, Serialize};

pub const UNKNOWN_AUTHOR: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub quote: String,
    pub author: String,
    pub source: QuoteSource,
}

impl QuoteResponse {
    pub fn new(quote: Quote, source: QuoteSource) -> Self {
        Self {
            quote: quote.text,
            author: quote.author,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_response_serializes_source_lowercase() {
        let resp = QuoteResponse::new(Quote::new("Breathe.", "Anon"), QuoteSource::Fallback);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["quote"], "Breathe.");
        assert_eq!(json["author"], "Anon");
        assert_eq!(json["source"], "fallback");
    }
}
