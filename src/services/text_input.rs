// Claim Input Service
// Normalizes user-supplied claim text before dispatch

use regex::Regex;

/// Normalize a claim before it goes on the wire. Smart punctuation is
/// mapped to ASCII, unicode spaces to plain spaces, and all whitespace
/// runs (including line breaks from pasted text) collapse to single
/// spaces. Returns an empty string for blank input.
pub fn normalize_claim(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let mut s = text.to_string();

    // Replace smart quotes
    s = s
        .replace('\u{201c}', "\"")
        .replace('\u{201d}', "\"")
        .replace('\u{2018}', "'")
        .replace('\u{2019}', "'");

    // Replace em dash
    s = s.replace('\u{2014}', "-");

    // Replace ideographic space and non-breaking space
    let space_re = Regex::new(r"[\u{3000}\u{00A0}]").unwrap();
    s = space_re.replace_all(&s, " ").to_string();

    // A claim is a single line of text; collapse every whitespace run
    let ws_re = Regex::new(r"\s+").unwrap();
    s = ws_re.replace_all(&s, " ").to_string();

    s.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_normalizes_to_empty() {
        assert_eq!(normalize_claim(""), "");
        assert_eq!(normalize_claim("   \t  \n"), "");
    }

    #[test]
    fn test_smart_punctuation_replaced() {
        let input = "\u{201c}Scientists\u{201d} confirm \u{2014} it\u{2019}s dry";
        assert_eq!(normalize_claim(input), "\"Scientists\" confirm - it's dry");
    }

    #[test]
    fn test_whitespace_collapsed_to_single_line() {
        let input = "Scientists  confirm\nwater\t is\u{00A0}dry";
        assert_eq!(normalize_claim(input), "Scientists confirm water is dry");
    }

    #[test]
    fn test_already_clean_text_unchanged() {
        let input = "Scientists confirm water is dry";
        assert_eq!(normalize_claim(input), input);
    }
}
