use std::sync::LazyLock;

use regex::Regex;

use crate::config::ORIGIN;

static LEARN_MORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" Learn more\.?").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Drop the "Learn more" link text the index table appends to descriptions.
pub fn strip_learn_more(description: &str) -> String {
    LEARN_MORE_RE.replace(description, "").into_owned()
}

/// Site-relative links become absolute; anything else passes through.
pub fn absolutize(link: &str) -> String {
    if link.starts_with('/') {
        format!("{}{}", ORIGIN, link)
    } else {
        link.to_string()
    }
}

/// "range : The range to sum" with name "range" -> "The range to sum".
pub fn strip_variable_name(item_text: &str, name: &str) -> String {
    let rest = item_text.replacen(name, "", 1);
    let rest = rest
        .strip_prefix(" : ")
        .or_else(|| rest.strip_prefix(" - "))
        .unwrap_or(&rest);
    rest.trim().to_string()
}

/// Trim, then collapse runs of whitespace left over from markup
/// indentation. Cells that wrap across source lines come out on one line.
pub fn clean(text: &str) -> String {
    WS_RE.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learn_more_with_period() {
        assert_eq!(strip_learn_more("Returns a value. Learn more."), "Returns a value.");
    }

    #[test]
    fn learn_more_without_period() {
        assert_eq!(strip_learn_more("Returns a value. Learn more"), "Returns a value.");
    }

    #[test]
    fn learn_more_absent_is_noop() {
        assert_eq!(strip_learn_more("Returns a value."), "Returns a value.");
        let once = strip_learn_more("Returns a value. Learn more.");
        assert_eq!(strip_learn_more(&once), once);
    }

    #[test]
    fn relative_link_gets_origin() {
        assert_eq!(
            absolutize("/docs/table/123"),
            "https://support.google.com/docs/table/123"
        );
    }

    #[test]
    fn absolute_link_unchanged() {
        let link = "https://support.google.com/docs/answer/3093669?hl=en";
        assert_eq!(absolutize(link), link);
    }

    #[test]
    fn variable_colon_separator() {
        assert_eq!(
            strip_variable_name("range : The range to sum", "range"),
            "The range to sum"
        );
    }

    #[test]
    fn variable_dash_separator() {
        assert_eq!(strip_variable_name("range - The range", "range"), "The range");
    }

    #[test]
    fn variable_no_separator() {
        assert_eq!(strip_variable_name("range The range", "range"), "The range");
    }

    #[test]
    fn variable_name_removed_only_once() {
        assert_eq!(
            strip_variable_name("criterion - The criterion to match", "criterion"),
            "The criterion to match"
        );
    }

    #[test]
    fn variable_empty_name() {
        assert_eq!(strip_variable_name("Some text", ""), "Some text");
    }

    #[test]
    fn clean_collapses_whitespace() {
        assert_eq!(clean("\n  SUM(value1,\n     [value2]) "), "SUM(value1, [value2])");
    }
}
