//! Relationship-description parsing
//!
//! Turns a free-text relationship description ("paternal grandfather
//! sibling 1 child 3") into an ordered step sequence. The scanner walks the
//! whitespace-delimited tokens against a fixed keyword table; a word outside
//! the vocabulary, or an index that does not follow an indexable keyword, is
//! rejected. Parsing is stateless and safe to call concurrently.

use crate::error::{PedigreeError, Result};
use crate::models::step::{Step, StepDirection, StepSequence};

/// Parsed relationship description
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedPath {
    /// Ordered steps from the family-group root to the described person
    pub steps: StepSequence,
    /// Whether a twin token appeared in the description
    pub twin: bool,
}

/// Parse a relationship description into a step sequence
///
/// Matching is case-insensitive; punctuation stuck to a word is stripped
/// before lookup. An empty step sequence means the description was "self".
pub fn parse_relationship_text(text: &str) -> Result<ParsedPath> {
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect();

    let mut parsed = ParsedPath::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        i += 1;
        match token {
            "self" => {}
            "twin" => parsed.twin = true,
            "identical" => {
                if tokens.get(i).is_some_and(|next| next == "twin") {
                    parsed.twin = true;
                    i += 1;
                } else {
                    return Err(PedigreeError::UnknownToken {
                        token: token.to_string(),
                    });
                }
            }
            "maternal" | "mother" | "grandmother" => {
                parsed.steps.push(Step::new(StepDirection::Mother));
            }
            "paternal" | "father" | "grandfather" => {
                parsed.steps.push(Step::new(StepDirection::Father));
            }
            "sibling" => parsed
                .steps
                .push(indexed_step(StepDirection::Sibling, &tokens, &mut i)?),
            "child" => parsed
                .steps
                .push(indexed_step(StepDirection::Child, &tokens, &mut i)?),
            "mate" => parsed
                .steps
                .push(indexed_step(StepDirection::Mate, &tokens, &mut i)?),
            _ if is_numeric(token) => {
                return Err(PedigreeError::UnexpectedIndex {
                    token: token.to_string(),
                });
            }
            _ => {
                return Err(PedigreeError::UnknownToken {
                    token: token.to_string(),
                });
            }
        }
    }

    Ok(parsed)
}

/// Build a sibling/child/mate step, consuming an index token if one
/// immediately follows the keyword
fn indexed_step(direction: StepDirection, tokens: &[String], i: &mut usize) -> Result<Step> {
    let mut step = Step::new(direction);
    if let Some(next) = tokens.get(*i) {
        if is_numeric(next) {
            let index: u32 = next.parse().map_err(|_| PedigreeError::InvalidIndex {
                token: next.clone(),
            })?;
            if index == 0 {
                return Err(PedigreeError::InvalidIndex {
                    token: next.clone(),
                });
            }
            step.index = Some(index);
            *i += 1;
        }
    }
    Ok(step)
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}
