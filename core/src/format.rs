//! Message rendering: plural choice and placeholder interpolation

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

use crate::translate::TranslateArgs;

static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\s*([^{}]*?)\s*\}").unwrap());

/// Render a message template with the call arguments
pub(crate) fn render(template: &str, args: &TranslateArgs, escape: bool) -> String {
    let message = match args.plural {
        Some(count) => select_plural(template, count),
        None => template,
    };
    interpolate(message, args, escape)
}

/// Pick one of the `|` separated plural forms
pub(crate) fn select_plural(template: &str, count: i64) -> &str {
    let choices: Vec<&str> = template.split('|').map(str::trim).collect();
    if choices.len() < 2 {
        return template;
    }
    let index = plural_index(count, choices.len()).min(choices.len() - 1);
    choices[index]
}

/// Default choice rule: `zero | one | many` for three or more forms,
/// `one | many` for two forms (where zero reads as many).
fn plural_index(count: i64, choices: usize) -> usize {
    let count = count.unsigned_abs();
    if choices == 2 {
        return if count == 1 { 0 } else { 1 };
    }
    count.min(2) as usize
}

fn interpolate(message: &str, args: &TranslateArgs, escape: bool) -> String {
    PLACEHOLDER_REGEX
        .replace_all(message, |caps: &Captures| {
            let token = &caps[1];
            if let Some(literal) = token.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')) {
                return literal.to_string();
            }
            args.lookup(token)
                .map(|value| display_value(&value, escape))
                .unwrap_or_default()
        })
        .into_owned()
}

fn display_value(value: &Value, escape: bool) -> String {
    let text = match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    if escape { escape_html(&text) } else { text }
}

pub(crate) fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_index() {
        // one | many
        assert_eq!(plural_index(0, 2), 1);
        assert_eq!(plural_index(1, 2), 0);
        assert_eq!(plural_index(7, 2), 1);
        // zero | one | many
        assert_eq!(plural_index(0, 3), 0);
        assert_eq!(plural_index(1, 3), 1);
        assert_eq!(plural_index(-4, 3), 2);
    }

    #[test]
    fn test_select_plural() {
        let template = "no apples | one apple | {count} apples";
        assert_eq!(select_plural(template, 0), "no apples");
        assert_eq!(select_plural(template, 1), "one apple");
        assert_eq!(select_plural(template, 10), "{count} apples");
        assert_eq!(select_plural("plain message", 3), "plain message");
    }

    #[test]
    fn test_interpolate_named_list_literal() {
        let args = TranslateArgs::list(["first"]).with("name", "world").with("age", 3);
        assert_eq!(render("hello, {name}", &args, false), "hello, world");
        assert_eq!(render("{0} then { name }", &args, false), "first then world");
        assert_eq!(render("age {age}", &args, false), "age 3");
        assert_eq!(render("{'@'}{name}", &args, false), "@world");
        assert_eq!(render("missing {nobody}!", &args, false), "missing !");
    }

    #[test]
    fn test_render_plural_with_implicit_count() {
        let args = TranslateArgs::new().plural(4);
        assert_eq!(render("no apples | one apple | {count} apples", &args, false), "4 apples");
        assert_eq!(render("car | {n} cars", &args, false), "4 cars");
    }

    #[test]
    fn test_escape_parameter() {
        let args = TranslateArgs::named([("name", "<b>lingo</b>")]);
        assert_eq!(render("<p>{name}</p>", &args, true), "<p>&lt;b&gt;lingo&lt;/b&gt;</p>");
        assert_eq!(render("<p>{name}</p>", &args, false), "<p><b>lingo</b></p>");
    }
}
