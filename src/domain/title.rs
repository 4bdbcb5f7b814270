//! Title Case formatting for front matter titles

/// Words kept lowercase unless they open or close the title
const MINOR_WORDS: [&str; 18] = [
    "a", "an", "the", "and", "but", "or", "nor", "on", "in", "with", "of", "at", "for", "by",
    "to", "up", "down", "from",
];

/// Convert a free-text title to Title Case.
///
/// The title is lowercased and split on single spaces. The first and last
/// words are always capitalized; words in between stay lowercase when they
/// are minor words.
pub fn format_title(title: &str) -> String {
    let lowered = title.to_lowercase();
    let words: Vec<&str> = lowered.split(' ').collect();
    let last = words.len() - 1;

    words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            if index == 0 || index == last || !MINOR_WORDS.contains(word) {
                capitalize(word)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character, leaving the rest untouched
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_words_stay_lowercase() {
        assert_eq!(format_title("the cat in the hat"), "The Cat in the Hat");
    }

    #[test]
    fn test_last_word_always_capitalized() {
        assert_eq!(format_title("what are you up to"), "What Are You up To");
    }

    #[test]
    fn test_input_is_lowercased_first() {
        assert_eq!(format_title("LORD OF THE RINGS"), "Lord of the Rings");
    }

    #[test]
    fn test_single_word() {
        assert_eq!(format_title("and"), "And");
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(format_title(""), "");
    }

    #[test]
    fn test_double_spaces_are_preserved() {
        assert_eq!(format_title("hello  world"), "Hello  World");
    }

    #[test]
    fn test_non_ascii_first_letter() {
        assert_eq!(format_title("élan of the day"), "Élan of the Day");
    }
}
