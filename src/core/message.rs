//! Message normalization
//!
//! Turns the value handed to [`Logger::log`](super::Logger::log) and its
//! optional context into the final text stored in a record.

use super::value::{LogContext, Value};

/// Produce the record text for `message`.
///
/// Lists and maps are dumped, other stringifiable values are converted,
/// strings are interpolated against `context`. An exception stored under
/// the `exception` key is appended on its own line. Opaque values yield an
/// empty message.
pub fn process_message(message: &Value, context: Option<&LogContext>) -> String {
    let mut text = match message {
        Value::List(_) | Value::Map(_) => message.dump(),
        Value::String(s) => match context {
            Some(ctx) => interpolate(s, ctx),
            None => s.clone(),
        },
        Value::Opaque(type_name) => {
            log::warn!(
                "value of type {} has no string representation; logging an empty message",
                type_name
            );
            String::new()
        }
        other => other.as_text().unwrap_or_default(),
    };

    if let Some(exception) = context.and_then(LogContext::exception) {
        text.push('\n');
        text.push_str(&exception.to_string());
    }

    text
}

/// Replace each `{key}` token whose context entry is stringifiable.
///
/// Unknown keys and non-stringifiable entries are left verbatim. Inserted
/// text is never scanned for further tokens.
///
/// ```
/// use rotating_logger::{interpolate, LogContext};
///
/// let ctx = LogContext::new().with_field("test", "World");
/// assert_eq!(interpolate("Hello {test}!", &ctx), "Hello World!");
/// assert_eq!(interpolate("Hello {other}!", &ctx), "Hello {other}!");
/// ```
pub fn interpolate(message: &str, context: &LogContext) -> String {
    if !message.contains('{') {
        return message.to_string();
    }

    let mut out = String::with_capacity(message.len());
    let mut rest = message;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            context
                .get(key)
                .and_then(Value::as_text)
                .map(|text| (text, close))
        });

        match replacement {
            Some((text, close)) => {
                out.push_str(&text);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
