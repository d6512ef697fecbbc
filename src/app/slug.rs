use crate::app::models::{CharFilter, RunConfig};
use anyhow::{Context, Result};
use deunicode::deunicode_with_tofu;
use regex::Regex;

pub const SEPARATOR: char = '-';
const SEPARATOR_STR: &str = "-";

/// Literal substitutions applied before transliteration, in order.
const REPLACEMENTS: [(&str, &str); 7] = [
    ("Ü", "ue"),
    ("ü", "ue"),
    ("Ä", "ae"),
    ("ä", "ae"),
    ("Ö", "oe"),
    ("ö", "oe"),
    ("'", ""),
];

/// Turns arbitrary text into a separator-joined, ASCII-only name.
#[derive(Debug, Clone)]
pub struct Slugifier {
    filter: Option<Regex>,
    lowercase: bool,
}

impl Slugifier {
    pub fn new(filter: CharFilter, lowercase: bool) -> Result<Self> {
        let filter = filter
            .pattern()
            .map(|pattern| {
                Regex::new(pattern).context(format!("Invalid filter pattern: {}", pattern))
            })
            .transpose()?;

        Ok(Self { filter, lowercase })
    }

    pub fn from_config(config: &RunConfig) -> Result<Self> {
        Self::new(config.filter, config.lowercase)
    }

    pub fn slug(&self, text: &str) -> String {
        self.slug_without::<&str>(text, &[])
    }

    /// Slugifies `text`, then drops every word that appears in `stopwords`.
    pub fn slug_without<S: AsRef<str>>(&self, text: &str, stopwords: &[S]) -> String {
        let text = apply_replacements(text);
        let text = html_escape::decode_html_entities(&text);
        // Entities may have produced umlauts or apostrophes of their own.
        let text = apply_replacements(&text);
        let mut text = deunicode_with_tofu(&text, "");

        if self.lowercase {
            text = text.to_lowercase();
        }
        let text = strip_digit_grouping(&text);

        let filtered = match &self.filter {
            Some(filter) => filter.replace_all(&text, SEPARATOR_STR).into_owned(),
            // Even unfiltered names must stay a single path component.
            None => text.replace(['/', '\\', '\0'], SEPARATOR_STR),
        };

        if stopwords.is_empty() {
            return join_words(filtered.split(SEPARATOR));
        }

        let stopwords: Vec<String> = stopwords
            .iter()
            .map(|word| {
                if self.lowercase {
                    word.as_ref().to_lowercase()
                } else {
                    word.as_ref().to_owned()
                }
            })
            .collect();

        join_words(
            filtered
                .split(SEPARATOR)
                .filter(|word| !stopwords.iter().any(|stop| stop.as_str() == *word)),
        )
    }

    /// Splits an already slugified text into its words.
    pub fn words(slug: &str) -> Vec<String> {
        slug.split(SEPARATOR)
            .filter(|word| !word.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

fn apply_replacements(text: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(text.to_owned(), |acc, (from, to)| acc.replace(from, to))
}

/// Drops commas sitting between two digits, so `1,000` reads as `1000`.
fn strip_digit_grouping(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &ch) in chars.iter().enumerate() {
        if ch == ','
            && i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(|next| next.is_ascii_digit())
        {
            continue;
        }
        out.push(ch);
    }

    out
}

/// Joins the non-empty words with a single separator; no leading or trailing separator remains.
fn join_words<'a>(words: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for word in words.filter(|word| !word.is_empty()) {
        if !out.is_empty() {
            out.push(SEPARATOR);
        }
        out.push_str(word);
    }
    out
}
