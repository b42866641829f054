//! Filename sanitation for uploads.
//!
//! Client-supplied filenames are reduced to a safe ASCII subset before they
//! touch the filesystem. Path separators are stripped, whitespace runs are
//! collapsed to underscores, and anything outside alphanumerics plus
//! `.`, `_`, `-` is dropped. The result never escapes its target directory.

/// Sanitizes a client-supplied filename to a safe form.
///
/// Returns an empty string when nothing safe remains, which callers must
/// treat as a rejected filename.
pub fn sanitize_filename(filename: &str) -> String {
    let separators_stripped: String = filename
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let collapsed = separators_stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");

    let filtered: String = collapsed
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    filtered.trim_matches(['.', '_']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_filename_passes_through() {
        assert_eq!(sanitize_filename("style.css"), "style.css");
        assert_eq!(sanitize_filename("logo-v2.png"), "logo-v2.png");
    }

    #[test]
    fn test_spaces_collapse_to_underscores() {
        assert_eq!(sanitize_filename("my page.html"), "my_page.html");
        assert_eq!(sanitize_filename("a   b.css"), "a_b.css");
    }

    #[test]
    fn test_traversal_sequences_are_neutralized() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(
            sanitize_filename("..\\..\\windows\\cmd.exe"),
            "windows_cmd.exe"
        );
    }

    #[test]
    fn test_non_ascii_and_special_characters_are_dropped() {
        assert_eq!(sanitize_filename("naïve.css"), "nave.css");
        assert_eq!(sanitize_filename("photo (1).png"), "photo_1.png");
        assert_eq!(sanitize_filename("a<b>c.js"), "abc.js");
    }

    #[test]
    fn test_leading_dots_and_underscores_are_trimmed() {
        assert_eq!(sanitize_filename(".hidden"), "hidden");
        assert_eq!(sanitize_filename("__init__.py"), "init__.py");
        assert_eq!(sanitize_filename("...css"), "css");
    }

    #[test]
    fn test_hostile_input_collapses_to_empty() {
        assert_eq!(sanitize_filename("../.."), "");
        assert_eq!(sanitize_filename("///"), "");
        assert_eq!(sanitize_filename("..."), "");
        assert_eq!(sanitize_filename(""), "");
    }
}
