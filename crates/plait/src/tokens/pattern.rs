use ::regex::Regex;

use crate::messages;
use crate::outcome::ParseOutcome;
use crate::parser::Parser;
use crate::GrammarError;

/// Matches `pattern` at the start of the input and yields the matched text.
///
/// The pattern is anchored, so it never skips input to find a match. Fails
/// with "Expected to match against regex <pattern>".
///
/// ```
/// use plait::regex;
///
/// let hex = regex("[0-9a-f]+").unwrap();
/// assert_eq!(hex.parse_value("ff0 rest"), Ok("ff0".to_string()));
/// assert!(regex("(").is_err());
/// ```
pub fn regex(pattern: &str) -> Result<Parser<String>, GrammarError> {
    let anchored = Regex::new(&format!("^(?:{pattern})"))?;
    Ok(matching(anchored, messages::expected_pattern(pattern)))
}

/// Like [`regex`], for an already compiled expression.
///
/// Only matches starting at the first character count. An expression that
/// does not start with `^` is recompiled with a leading anchor so a failed
/// attempt does not scan the rest of the input.
pub fn from_regex(re: Regex) -> Parser<String> {
    let message = messages::expected_pattern(re.as_str());
    // The unanchored form is kept if the wrapped pattern hits a size limit;
    // `matching` still rejects matches after the first character.
    let re = if re.as_str().starts_with('^') {
        re
    } else {
        Regex::new(&format!("^(?:{})", re.as_str())).unwrap_or(re)
    };
    matching(re, message)
}

fn matching(re: Regex, message: String) -> Parser<String> {
    Parser::new(move |input, position| match re.find(input) {
        Some(found) if found.start() == 0 => {
            let consumed = found.as_str();
            ParseOutcome::single(
                consumed.to_string(),
                &input[found.end()..],
                position.advance(consumed),
            )
        }
        _ => ParseOutcome::failure(message.as_str(), position),
    })
}
