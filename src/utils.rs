// src/utils.rs
use std::path::Path;

/// Title-case a string for display: the first letter of every alphabetic run
/// is uppercased, the rest lowercased. Non-letters pass through and reset the
/// run, so "ci/cd" becomes "Ci/Cd" and "scikit-learn" becomes "Scikit-Learn".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_was_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_was_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_was_letter = true;
        } else {
            out.push(c);
            prev_was_letter = false;
        }
    }
    out
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("python"), "Python");
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("ruby on rails"), "Ruby On Rails");
        assert_eq!(title_case("ci/cd"), "Ci/Cd");
        assert_eq!(title_case("scikit-learn"), "Scikit-Learn");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("BACKEND ENGINEER"), "Backend Engineer");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_get_file_extension() {
        assert_eq!(get_file_extension("resume.pdf"), Some("pdf".to_string()));
        assert_eq!(get_file_extension("resume.TXT"), Some("txt".to_string()));
        assert_eq!(get_file_extension("noext"), None);
    }
}
