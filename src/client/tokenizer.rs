//! Command Tokenizer
//!
//! Splits a human-typed command line into argument words.

/// Split a command line into words.
///
/// Words are separated by whitespace. A single- or double-quoted run forms
/// one word with the quotes stripped and inner whitespace preserved; there
/// are no escape sequences. An unterminated quote takes the rest of the
/// line as the final word. Blank input yields no words.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut rest = line;

    loop {
        rest = rest.trim_start();
        let Some(first) = rest.chars().next() else {
            break;
        };

        if first == '"' || first == '\'' {
            let body = &rest[1..];
            match body.find(first) {
                Some(end) => {
                    words.push(body[..end].to_string());
                    rest = &body[end + 1..];
                }
                None => {
                    words.push(body.to_string());
                    rest = "";
                }
            }
        } else {
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            words.push(rest[..end].to_string());
            rest = &rest[end..];
        }
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokenize("set key value"), vec!["set", "key", "value"]);
    }

    #[test]
    fn collapses_repeated_separators() {
        assert_eq!(tokenize("  get \t key  "), vec!["get", "key"]);
    }

    #[test]
    fn double_quotes_keep_inner_whitespace() {
        assert_eq!(
            tokenize("set greeting \"hello world\""),
            vec!["set", "greeting", "hello world"]
        );
    }

    #[test]
    fn single_quotes_work_too() {
        assert_eq!(tokenize("set k 'a b c'"), vec!["set", "k", "a b c"]);
    }

    #[test]
    fn quoted_empty_word() {
        assert_eq!(tokenize("set k \"\""), vec!["set", "k", ""]);
    }

    #[test]
    fn unterminated_quote_takes_rest_of_line() {
        assert_eq!(tokenize("set k \"no close"), vec!["set", "k", "no close"]);
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
    }

    #[test]
    fn quote_type_is_not_mixed() {
        assert_eq!(tokenize("say \"it's fine\""), vec!["say", "it's fine"]);
    }
}
