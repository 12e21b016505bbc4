//! Output formatting for CLI display
//!
//! Line formats shared by the `tags`, `show` and `copy` commands. In quiet
//! mode every helper returns the bare value so the output can be piped.

use colored::Colorize;

/// Format a category heading with its entry count
#[must_use]
pub fn category_heading(name: &str, count: usize, quiet: bool) -> String {
    if quiet {
        name.to_string()
    } else {
        format!("{} ({count})", name.bold())
    }
}

/// Format a tag with its entry count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} ({count})")
    }
}

/// Format a section title above a group of kaomoji
#[must_use]
pub fn section_heading(title: &str) -> String {
    title.bold().underline().to_string()
}

/// Format one kaomoji line, with its index within the tag
#[must_use]
pub fn entry_line(index: usize, text: &str, quiet: bool) -> String {
    if quiet {
        text.to_string()
    } else {
        format!("  {} {text}", format!("{index:>2}").dimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_formats_are_bare() {
        assert_eq!(category_heading("Themes", 4, true), "Themes");
        assert_eq!(tag_with_count("joy", 3, true), "joy");
        assert_eq!(entry_line(0, "(^_^)", true), "(^_^)");
    }

    #[test]
    fn test_tag_with_count() {
        assert_eq!(tag_with_count("joy", 3, false), "  joy (3)");
    }

    #[test]
    fn test_decorated_formats_keep_text() {
        assert!(category_heading("Themes", 4, false).contains("Themes"));
        assert!(category_heading("Themes", 4, false).ends_with("(4)"));
        assert!(section_heading("Joy (3)").contains("Joy (3)"));
        let line = entry_line(2, "(T_T)", false);
        assert!(line.contains('2'));
        assert!(line.ends_with("(T_T)"));
    }
}
