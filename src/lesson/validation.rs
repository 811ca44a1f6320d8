pub const MAX_TITLE_LEN: usize = 120;

/// Trims a lesson title and checks it is usable.
pub fn validate_title(title: &str) -> Result<String, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Lesson title is required".to_string());
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(format!(
            "Lesson title must be at most {} characters",
            MAX_TITLE_LEN
        ));
    }
    Ok(title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert_eq!(validate_title("  Algebra  ").unwrap(), "Algebra");
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"a".repeat(MAX_TITLE_LEN)).is_ok());
        assert!(validate_title(&"a".repeat(MAX_TITLE_LEN + 1)).is_err());
        assert!(validate_title(&"é".repeat(MAX_TITLE_LEN)).is_ok());
    }
}
