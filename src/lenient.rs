//!
//! The lenient JSON parsing.
//!
//! Some explorers store the standard JSON input with raw line breaks and tabs inside string
//! literals, which the JSON grammar forbids. Such characters are escaped before parsing.
//!

use std::borrow::Cow;

use serde::de::DeserializeOwned;

///
/// Parses the JSON `input`, tolerating raw control characters inside string literals.
///
pub fn from_str<T>(input: &str) -> serde_json::Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(escape_control_characters(input).as_ref())
}

///
/// Escapes the raw control characters found inside JSON string literals.
///
/// The text outside of string literals is left untouched, so the whitespace between tokens is
/// preserved. Returns the input as is if it does not contain any control characters.
///
pub fn escape_control_characters(input: &str) -> Cow<'_, str> {
    if !input.bytes().any(|byte| byte < 0x20) {
        return Cow::Borrowed(input);
    }

    let mut output = String::with_capacity(input.len() + input.len() / 16);
    let mut is_string = false;
    let mut is_escaped = false;
    for character in input.chars() {
        if !is_string {
            if character == '"' {
                is_string = true;
            }
            output.push(character);
            continue;
        }

        if is_escaped {
            is_escaped = false;
            output.push(character);
            continue;
        }

        match character {
            '\\' => {
                is_escaped = true;
                output.push(character);
            }
            '"' => {
                is_string = false;
                output.push(character);
            }
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\u{8}' => output.push_str("\\b"),
            '\u{c}' => output.push_str("\\f"),
            character if (character as u32) < 0x20 => {
                output.push_str(format!("\\u{:04x}", character as u32).as_str());
            }
            character => output.push(character),
        }
    }
    Cow::Owned(output)
}
