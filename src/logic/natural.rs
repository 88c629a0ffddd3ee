//! Natural ordering for file names
//!
//! Pure functions for sorting names the way a person expects: runs of
//! digits compare by numeric value instead of character by character,
//! so `img2.jpg` sorts before `img10.jpg`.

/// One segment of a natural sort key.
///
/// Derived ordering puts `Number` before `Text` at the same position,
/// which keeps `2.jpg` ahead of `a.jpg`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyPart {
    Number(u128),
    Text(String),
}

/// Split a string into alternating numeric and text runs for comparison.
///
/// Text runs are lowercased so ordering is case-insensitive. Digit runs
/// too long for a `u128` fall back to text comparison instead of being
/// dropped.
///
/// # Examples
/// ```
/// use imgrid::logic::natural::natural_key;
///
/// let mut names = vec!["img10.jpg", "img2.jpg", "img1.jpg"];
/// names.sort_by_key(|name| natural_key(name));
/// assert_eq!(names, ["img1.jpg", "img2.jpg", "img10.jpg"]);
/// ```
pub fn natural_key(s: &str) -> Vec<KeyPart> {
    let mut parts = Vec::new();
    let mut digits = String::new();
    let mut text = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            if !text.is_empty() {
                parts.push(KeyPart::Text(text.to_lowercase()));
                text.clear();
            }
            digits.push(c);
        } else {
            if !digits.is_empty() {
                parts.push(numeric_part(&digits));
                digits.clear();
            }
            text.push(c);
        }
    }

    if !digits.is_empty() {
        parts.push(numeric_part(&digits));
    }
    if !text.is_empty() {
        parts.push(KeyPart::Text(text.to_lowercase()));
    }

    parts
}

fn numeric_part(digits: &str) -> KeyPart {
    match digits.parse::<u128>() {
        Ok(n) => KeyPart::Number(n),
        Err(_) => KeyPart::Text(digits.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut names: Vec<&str>) -> Vec<&str> {
        names.sort_by_key(|name| natural_key(name));
        names
    }

    #[test]
    fn test_numeric_runs_compare_by_value() {
        assert_eq!(
            sorted(vec!["a10", "a2", "a1"]),
            vec!["a1", "a2", "a10"],
            "a2 must come before a10"
        );
    }

    #[test]
    fn test_plain_text_stays_alphabetical() {
        assert_eq!(
            sorted(vec!["cherry", "apple", "banana"]),
            vec!["apple", "banana", "cherry"]
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            sorted(vec!["Banana", "apple", "Cherry"]),
            vec!["apple", "Banana", "Cherry"]
        );
    }

    #[test]
    fn test_number_sorts_before_text() {
        assert_eq!(sorted(vec!["a.jpg", "2.jpg"]), vec!["2.jpg", "a.jpg"]);
    }

    #[test]
    fn test_mixed_runs() {
        assert_eq!(
            sorted(vec!["frame12b", "frame2a", "frame2b", "frame12a"]),
            vec!["frame2a", "frame2b", "frame12a", "frame12b"]
        );
    }

    #[test]
    fn test_leading_zeros_compare_equal() {
        assert_eq!(natural_key("img002"), natural_key("img2"));
    }

    #[test]
    fn test_oversized_digit_run_still_ordered() {
        // 40 digits cannot fit a u128; the run falls back to text
        let huge = "x9999999999999999999999999999999999999999";
        let key = natural_key(huge);
        assert_eq!(key.len(), 2);
        assert!(matches!(key[1], KeyPart::Text(_)));
    }

    #[test]
    fn test_empty_string() {
        assert!(natural_key("").is_empty());
    }
}
