//! Flat `key=value` properties text.
//!
//! The settings file format is fixed: one `key=value` pair per line,
//! `#` or `!` comment lines, blank lines ignored. Keys and values are
//! trimmed; everything after the first `=` belongs to the value. Lines
//! without `=` are skipped with a warning rather than failing the load.

/// Parses properties text into key/value pairs, preserving file order.
pub fn parse(text: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) => {
                let key = key.trim();
                if key.is_empty() {
                    tracing::warn!(line, "skipping property line with empty key");
                    continue;
                }
                pairs.push((key.to_owned(), value.trim().to_owned()));
            }
            None => {
                tracing::warn!(line, "skipping malformed property line");
            }
        }
    }

    pairs
}

/// Renders key/value pairs as properties text with a header comment.
pub fn render(pairs: &[(String, String)]) -> String {
    let mut out = String::from("# HealthCare Pro settings\n");
    for (key, value) in pairs {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_pairs_and_skips_noise() {
        let text = "# comment\n! also a comment\n\nlanguage=English\n  dateFormat = MM/dd/yyyy  \nnot a pair\n";
        let pairs = parse(text);

        assert_eq!(
            pairs,
            vec![
                ("language".to_owned(), "English".to_owned()),
                ("dateFormat".to_owned(), "MM/dd/yyyy".to_owned()),
            ]
        );
    }

    #[test]
    fn parse_keeps_equals_signs_in_values() {
        let pairs = parse("note=a=b=c");
        assert_eq!(pairs, vec![("note".to_owned(), "a=b=c".to_owned())]);
    }

    #[test]
    fn render_output_parses_back() {
        let pairs = vec![
            ("language".to_owned(), "Spanish".to_owned()),
            ("largeTextMode".to_owned(), "true".to_owned()),
        ];

        let text = render(&pairs);

        assert!(text.starts_with("# HealthCare Pro settings\n"));
        assert_eq!(parse(&text), pairs);
    }
}
