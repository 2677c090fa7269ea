use serde::{Deserialize, Serialize};

use super::lexer::{Lexed, Token};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub regular_terms: Vec<String>,
    pub required_terms: Vec<String>,
    pub excluded_terms: Vec<String>,
    pub or_terms: Vec<String>,
}

impl ParsedQuery {
    pub fn is_empty(&self) -> bool {
        self.regular_terms.is_empty()
            && self.required_terms.is_empty()
            && self.excluded_terms.is_empty()
            && self.or_terms.is_empty()
    }
}

/// An `or` token acts as an operator whenever it has a token on both sides.
fn is_or_operator(tokens: &[Token], idx: usize) -> bool {
    matches!(tokens[idx], Token::Or(_)) && idx > 0 && idx + 1 < tokens.len()
}

fn push_unique(list: &mut Vec<String>, term: &str) {
    if !list.iter().any(|t| t == term) {
        list.push(term.to_string());
    }
}

/// Sort lexed tokens into term buckets in one left-to-right pass.
///
/// Words flanking an `or` operator go to `or_terms` instead of
/// `regular_terms`. Prefixed neighbours (`+x`, `-x`) keep their prefix
/// meaning and never join an OR group.
pub fn parse(lexed: Lexed) -> ParsedQuery {
    let Lexed { phrases, tokens } = lexed;

    let mut parsed = ParsedQuery {
        regular_terms: phrases,
        ..Default::default()
    };

    for (idx, token) in tokens.iter().enumerate() {
        match token {
            Token::Or(word) => {
                if !is_or_operator(&tokens, idx) {
                    parsed.regular_terms.push(word.clone());
                }
            }
            Token::Word(word) => {
                let flanks_or = (idx > 0 && is_or_operator(&tokens, idx - 1))
                    || (idx + 1 < tokens.len() && is_or_operator(&tokens, idx + 1));
                if flanks_or {
                    push_unique(&mut parsed.or_terms, word);
                } else {
                    parsed.regular_terms.push(word.clone());
                }
            }
            Token::Required(term) if !term.is_empty() => parsed.required_terms.push(term.clone()),
            Token::Excluded(term) if !term.is_empty() => parsed.excluded_terms.push(term.clone()),
            // bare `+` / `-`
            Token::Required(_) | Token::Excluded(_) => {}
        }
    }

    parsed
}
