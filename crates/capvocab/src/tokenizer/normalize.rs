//! # Caption Normalization

/// Lowercase `text` and remove every ASCII punctuation character.
///
/// Punctuation is deleted, not replaced by whitespace; so the pieces
/// of `"don't"` fuse into `"dont"`.
pub fn normalize_caption(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

/// Fused colloquial forms which are split into two words.
///
/// With punctuation already removed, these are the forms a treebank-style
/// word splitter still separates.
pub const CONTRACTIONS: &[(&str, &str, &str)] = &[
    ("cannot", "can", "not"),
    ("gimme", "gim", "me"),
    ("gonna", "gon", "na"),
    ("gotta", "got", "ta"),
    ("lemme", "lem", "me"),
    ("wanna", "wan", "na"),
];

/// Look up the split of a fused colloquial form.
pub fn split_contraction(word: &str) -> Option<(&'static str, &'static str)> {
    CONTRACTIONS
        .iter()
        .find(|(fused, _, _)| *fused == word)
        .map(|&(_, head, tail)| (head, tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_caption() {
        assert_eq!(normalize_caption("A Cat, SAT!"), "a cat sat");
        assert_eq!(normalize_caption("don't"), "dont");
        assert_eq!(normalize_caption("x-ray (2019)"), "xray 2019");
        assert_eq!(normalize_caption("!!!...???"), "");
        assert_eq!(normalize_caption(""), "");
    }

    #[test]
    fn test_normalize_keeps_non_ascii() {
        assert_eq!(normalize_caption("Café «Noir»"), "café «noir»");
    }

    #[test]
    fn test_split_contraction() {
        assert_eq!(split_contraction("cannot"), Some(("can", "not")));
        assert_eq!(split_contraction("gonna"), Some(("gon", "na")));
        assert_eq!(split_contraction("cat"), None);
    }
}
