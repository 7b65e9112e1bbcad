use regex::Regex;
use std::sync::OnceLock;

fn forbidden_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[\\/*?:"<>|]"#).expect("static pattern"))
}

/// Turns a display name into a fragment usable in a video filename.
///
/// Surrounding whitespace is trimmed, the characters `\ / * ? : " < > |` are
/// deleted and spaces become underscores. Everything else, including case and
/// non-ASCII text, is kept as is, except that whitespace other than spaces
/// left at an edge by a deleted character is trimmed too. Without that,
/// `"a\t*"` would give `"a\t"` and a second pass `"a"`; with it the function
/// is idempotent.
pub fn sanitize_filename(name: &str) -> String {
    let stripped = forbidden_chars().replace_all(name.trim(), "");
    stripped
        .trim_matches(|c: char| c.is_whitespace() && c != ' ')
        .replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "Push Up",
        "  Sit-Up ",
        "Squat/Jump",
        r#"a\b/c*d?e:f"g<h>i|j"#,
        "Curl de bíceps",
        "Élévation  latérale",
        "a *",
        "* a",
        "a\t*",
        "*\tb",
        "a\t *",
        "tab\tinside",
        "???",
        "  / Press /  ",
    ];

    #[rstest]
    #[case::plain("Push Up", "Push_Up")]
    #[case::trims("  Sit-Up \n", "Sit-Up")]
    #[case::strips_slash("Squat/Jump", "SquatJump")]
    #[case::strips_all_forbidden(r#"a\b/c*d?e:f"g<h>i|j"#, "abcdefghij")]
    #[case::keeps_case_and_unicode("Curl de Bíceps", "Curl_de_Bíceps")]
    #[case::every_space("Press  de  banca", "Press__de__banca")]
    #[case::space_next_to_deleted("a *", "a_")]
    #[case::empty("", "")]
    #[case::whitespace_only(" \t ", "")]
    #[case::only_forbidden("<>", "")]
    fn sanitizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_filename(input), expected);
    }

    #[test]
    fn idempotent() {
        for sample in SAMPLES {
            let once = sanitize_filename(sample);
            assert_eq!(sanitize_filename(&once), once, "input {:?}", sample);
        }
    }

    #[test]
    fn without_forbidden_chars_only_spaces_change() {
        for sample in SAMPLES
            .iter()
            .filter(|s| !s.contains(|c: char| r#"\/*?:"<>|"#.contains(c)))
        {
            assert_eq!(
                sanitize_filename(sample),
                sample.trim().replace(' ', "_"),
                "input {:?}",
                sample
            );
        }
    }
}
