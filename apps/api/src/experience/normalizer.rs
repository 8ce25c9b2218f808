/// Cleans a raw date-like fragment into a canonical token.
///
/// Lowercases, trims, and collapses whitespace runs to single spaces. Then
/// repairs the OCR artifact where a year is printed digit by digit
/// ("2 0 1 3" becomes "2013"). The repair fires only on a run of exactly four
/// single-digit groups; runs of any other length are left alone.
///
/// Never fails. Garbage in is garbage out, and the parser rejects it.
pub fn normalize_token(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let groups: Vec<&str> = lowered.split_whitespace().collect();

    let mut out: Vec<String> = Vec::with_capacity(groups.len());
    let mut i = 0;
    while i < groups.len() {
        let run = groups[i..]
            .iter()
            .take_while(|g| is_single_digit(g))
            .count();
        if run == 4 {
            out.push(groups[i..i + 4].concat());
            i += 4;
        } else if run > 0 {
            out.extend(groups[i..i + run].iter().map(|g| g.to_string()));
            i += run;
        } else {
            out.push(groups[i].to_string());
            i += 1;
        }
    }

    out.join(" ")
}

fn is_single_digit(group: &str) -> bool {
    group.len() == 1 && group.as_bytes()[0].is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2 0 1 3", "2013")]
    #[case("june 2 0 1 6", "june 2016")]
    #[case("  2   0 1\t3 ", "2013")]
    fn test_fuses_four_spaced_digits(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_token(raw), expected);
    }

    #[rstest]
    #[case("2 0 1", "2 0 1")]
    #[case("2 0 1 3 5", "2 0 1 3 5")]
    #[case("20 1 3", "20 1 3")]
    fn test_other_digit_group_counts_untouched(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_token(raw), expected);
    }

    #[test]
    fn test_collapses_whitespace_and_lowercases() {
        assert_eq!(normalize_token("  JUNE \n\n  2016 "), "june 2016");
    }

    #[test]
    fn test_idempotent_on_canonical_tokens() {
        for token in ["june 2016", "jun 2016", "06/2016", "2016", "current", "2 0 1"] {
            let once = normalize_token(token);
            assert_eq!(once, token);
            assert_eq!(normalize_token(&once), once);
        }
    }

    #[test]
    fn test_unparseable_passes_through() {
        assert_eq!(normalize_token("Sometime Soon"), "sometime soon");
    }
}
