/// Build the filter string handed to the native file chooser.
///
/// FLTK format: "Description\tPattern\nDescription2\tPattern2". The
/// configured pattern comes first so it is the default selection; FLTK adds
/// "All Files (*)" on its own.
pub fn presentation_filter(pattern: &str) -> String {
    let pattern = pattern.trim();
    if pattern.is_empty() || pattern == "*" {
        return "*".to_string();
    }
    [
        format!("Presentations\t{}", pattern),
        "Text Files\t*.txt".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern() {
        let filter = presentation_filter("*.{md,markdown}");
        assert_eq!(filter, "Presentations\t*.{md,markdown}\nText Files\t*.txt");
    }

    #[test]
    fn test_pattern_is_trimmed() {
        assert!(presentation_filter("  *.md ").starts_with("Presentations\t*.md\n"));
    }

    #[test]
    fn test_all_files() {
        assert_eq!(presentation_filter("*"), "*");
        assert_eq!(presentation_filter(""), "*");
    }
}
