//! Line classification for the definition grammar.

/// What one line of a definition file turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// An exactly-empty line. Ends the definition; anything after it
    /// belongs to the caller.
    Terminator,
    /// A `//` comment line.
    Comment,
    /// A `key = value` assignment, both sides trimmed.
    Assignment { key: &'a str, value: &'a str },
    /// None of the above. Policy for these lives in `ParseOptions`.
    Malformed,
}

/// Classify one line of input.
///
/// The key is the run of characters before the first `=`; it must be
/// non-empty and contain no whitespace once trimmed. The value is
/// everything after the first `=`, trimmed. Re-classifying an already
/// trimmed assignment yields the same key and value.
pub fn classify(line: &str) -> Line<'_> {
    if line.is_empty() {
        return Line::Terminator;
    }

    if line.starts_with("//") {
        return Line::Comment;
    }

    let Some((raw_key, raw_value)) = line.split_once('=') else {
        return Line::Malformed;
    };

    let key = raw_key.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return Line::Malformed;
    }

    Line::Assignment {
        key,
        value: raw_value.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_terminates() {
        assert_eq!(classify(""), Line::Terminator);
    }

    #[test]
    fn test_whitespace_only_is_not_a_terminator() {
        // Only an exactly-empty line ends the scan.
        assert_eq!(classify("   "), Line::Malformed);
        assert_eq!(classify("\t"), Line::Malformed);
    }

    #[test]
    fn test_comment() {
        assert_eq!(classify("// lift rating"), Line::Comment);
        assert_eq!(classify("//"), Line::Comment);
    }

    #[test]
    fn test_single_slash_is_not_a_comment() {
        assert_eq!(classify("/ oops"), Line::Malformed);
    }

    #[test]
    fn test_assignment_trims_both_sides() {
        assert_eq!(
            classify("  mass =  0.8  "),
            Line::Assignment {
                key: "mass",
                value: "0.8"
            }
        );
    }

    #[test]
    fn test_assignment_value_may_contain_equals() {
        // Only the first `=` splits.
        assert_eq!(
            classify("description = thrust = money"),
            Line::Assignment {
                key: "description",
                value: "thrust = money"
            }
        );
    }

    #[test]
    fn test_assignment_value_may_be_empty() {
        assert_eq!(
            classify("texture ="),
            Line::Assignment {
                key: "texture",
                value: ""
            }
        );
    }

    #[test]
    fn test_key_with_whitespace_is_malformed() {
        assert_eq!(classify("max temp = 3400"), Line::Malformed);
    }

    #[test]
    fn test_missing_equals_is_malformed() {
        assert_eq!(classify("just some text"), Line::Malformed);
        assert_eq!(classify("= 12"), Line::Malformed);
    }

    #[test]
    fn test_classification_is_idempotent_on_trimmed_assignments() {
        let Line::Assignment { key, value } = classify("  scale = 0.1 ") else {
            panic!("expected assignment");
        };

        let again = format!("{} = {}", key, value);
        assert_eq!(classify(&again), Line::Assignment { key, value });
    }
}
