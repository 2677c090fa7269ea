use once_cell::sync::Lazy;
use regex::Regex;

static PHRASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)""#).expect("static phrase regex is valid"));

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Word(String),
    Required(String), // +
    Excluded(String), // -
    /// Literal `or`, original spelling kept in case it has to fall back to a word.
    Or(String),
}

impl Token {
    fn from_word(word: &str) -> Token {
        if let Some(rest) = word.strip_prefix('+') {
            Token::Required(rest.to_string())
        } else if let Some(rest) = word.strip_prefix('-') {
            Token::Excluded(rest.to_string())
        } else if word.eq_ignore_ascii_case("or") {
            Token::Or(word.to_string())
        } else {
            Token::Word(word.to_string())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexed {
    /// Quoted phrases, in order of appearance, without the quotes.
    pub phrases: Vec<String>,
    /// Whitespace-separated tokens of whatever is left after phrase extraction.
    pub tokens: Vec<Token>,
}

/// Never fails: an unmatched quote stays part of the surrounding word.
pub fn tokenize(input: &str) -> Lexed {
    let phrases = PHRASE_REGEX
        .captures_iter(input)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().trim())
        .filter(|phrase| !phrase.is_empty())
        .map(str::to_string)
        .collect();

    let remaining = PHRASE_REGEX.replace_all(input, " ");
    let tokens = remaining.split_whitespace().map(Token::from_word).collect();

    Lexed { phrases, tokens }
}
