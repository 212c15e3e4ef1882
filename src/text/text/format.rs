use std::collections::HashMap;

use crate::text::text::{MissingArgument, Text};

impl Text {
    /// Treats the content as a template and returns a new Text with every placeholder of the form
    /// `{i}` replaced by `args[i]`. The receiver is left unmodified.
    ///
    /// The scan is a single left-to-right pass: literal runs are copied verbatim, and malformed
    /// placeholders (an unterminated `{`, or a body that isn't all decimal digits) are copied
    /// literally rather than treated as errors. A well-formed position with no supplied argument
    /// fails loudly.
    ///
    /// # Examples
    /// ```
    /// # use text_lib::text::Text;
    /// let template = Text::from("Value: {0}");
    /// let formatted = template.format_positional(&[Text::from("42")]);
    /// assert_eq!(formatted, Ok(Text::from("Value: 42")));
    ///
    /// assert!(Text::from("{1}").format_positional(&[Text::from("42")]).is_err());
    /// assert_eq!(
    ///     Text::from("{oops").format_positional(&[]),
    ///     Ok(Text::from("{oops")),
    /// );
    /// ```
    pub fn format_positional(&self, args: &[Text]) -> Result<Text, MissingArgument> {
        let bytes = self.as_bytes();
        let mut formatted = Text::new();
        let mut run = 0;
        let mut at = 0;

        while at < bytes.len() {
            let hit = if bytes[at] == b'{' { placeholder(bytes, at) } else { None };
            match hit.and_then(|(body, after)| Some((positional_index(body)?, after))) {
                Some((index, after)) => match args.get(index) {
                    Some(supplied) => {
                        formatted.append(&bytes[run..at]);
                        formatted.append(supplied);
                        at = after;
                        run = at;
                    }
                    None => return Err(MissingArgument { index, count: args.len() }),
                },
                None => at += 1,
            }
        }

        formatted.append(&bytes[run..]);
        Ok(formatted)
    }

    /// Treats the content as a template and returns a new Text with every placeholder of the form
    /// `{key}` replaced by the value under `key` in `args`. The receiver is left unmodified.
    ///
    /// Same single-pass scan as [`format_positional`](Text::format_positional), but an unmatched
    /// key is left literal instead of failing - named interpolation is the mode used when
    /// placeholders are optional.
    ///
    /// # Examples
    /// ```
    /// # use std::collections::HashMap;
    /// # use text_lib::text::Text;
    /// let mut args = HashMap::new();
    /// args.insert(Text::from("who"), Text::from("world"));
    ///
    /// let template = Text::from("hello {who}, {unset}");
    /// assert_eq!(template.format_named(&args), Text::from("hello world, {unset}"));
    /// ```
    pub fn format_named(&self, args: &HashMap<Text, Text>) -> Text {
        let bytes = self.as_bytes();
        let mut formatted = Text::new();
        let mut run = 0;
        let mut at = 0;

        while at < bytes.len() {
            let hit = if bytes[at] == b'{' { placeholder(bytes, at) } else { None };
            match hit.and_then(|(body, after)| Some((args.get(body)?, after))) {
                Some((value, after)) => {
                    formatted.append(&bytes[run..at]);
                    formatted.append(value);
                    at = after;
                    run = at;
                }
                None => at += 1,
            }
        }

        formatted.append(&bytes[run..]);
        formatted
    }
}

/// Splits out the placeholder opened at `open` (which must hold `{`): the body between the braces
/// and the offset just past the closing `}`. [`None`] when the brace is never closed.
fn placeholder(bytes: &[u8], open: usize) -> Option<(&[u8], usize)> {
    let close = bytes[open + 1..].iter().position(|&b| b == b'}')?;
    Some((&bytes[open + 1..open + 1 + close], open + close + 2))
}

/// Decodes a placeholder body as an argument position: all decimal digits, at least one.
fn positional_index(body: &[u8]) -> Option<usize> {
    if body.is_empty() {
        return None;
    }

    let mut index = 0_usize;
    for &digit in body {
        if !digit.is_ascii_digit() {
            return None;
        }
        index = index
            .checked_mul(10)?
            .checked_add(usize::from(digit - b'0'))?;
    }
    Some(index)
}
