use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern")
});

/// Lines scanned from the top of the document when looking for a name.
const NAME_SCAN_LINES: usize = 5;

/// First of the top lines whose first two words are capitalised.
pub fn extract_name(text: &str) -> Option<String> {
    text.split('\n')
        .take(NAME_SCAN_LINES)
        .find(|line| {
            let mut words = line.split_whitespace();
            matches!(
                (words.next(), words.next()),
                (Some(first), Some(second)) if starts_uppercase(first) && starts_uppercase(second)
            )
        })
        .map(|line| line.trim().to_string())
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_REGEX.find(text).map(|m| m.as_str().to_string())
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_first_capitalised_line() {
        let text = "curriculum vitae\n  Jane Q. Doe  \nConsultant";
        assert_eq!(extract_name(text), Some("Jane Q. Doe".to_string()));
    }

    #[test]
    fn test_name_only_in_first_five_lines() {
        let text = "a\nb\nc\nd\ne\nJane Doe";
        assert_eq!(extract_name(text), None);
    }

    #[test]
    fn test_single_word_line_is_not_a_name() {
        assert_eq!(extract_name("RESUME\njane doe"), None);
    }

    #[test]
    fn test_email_first_match() {
        let text = "Contact: jane.doe+cv@mail.example.org or jd@x.io";
        assert_eq!(
            extract_email(text),
            Some("jane.doe+cv@mail.example.org".to_string())
        );
    }

    #[test]
    fn test_email_missing() {
        assert_eq!(extract_email("no address here @ all"), None);
    }
}
