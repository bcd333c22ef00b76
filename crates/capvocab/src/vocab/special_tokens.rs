//! # Special Tokens
//!
//! Reserved marker tokens with fixed ids, assigned before any corpus word.

/// Padding token text.
pub const PAD_TOKEN: &str = "<PAD>";
/// Sequence start token text.
pub const START_TOKEN: &str = "<START>";
/// Sequence end token text.
pub const END_TOKEN: &str = "<END>";
/// Unknown word token text.
pub const UNK_TOKEN: &str = "<UNK>";

/// The number of reserved special tokens; also the first corpus word id.
pub const NUM_SPECIAL_TOKENS: usize = 4;

/// One of the reserved special tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpecialToken {
    /// `<PAD>`, id 0.
    Pad,
    /// `<START>`, id 1.
    Start,
    /// `<END>`, id 2.
    End,
    /// `<UNK>`, id 3.
    Unk,
}

impl SpecialToken {
    /// All special tokens, in id order.
    pub const ALL: [SpecialToken; NUM_SPECIAL_TOKENS] = [
        SpecialToken::Pad,
        SpecialToken::Start,
        SpecialToken::End,
        SpecialToken::Unk,
    ];

    /// The fixed id of this token.
    pub const fn id(self) -> usize {
        match self {
            SpecialToken::Pad => 0,
            SpecialToken::Start => 1,
            SpecialToken::End => 2,
            SpecialToken::Unk => 3,
        }
    }

    /// The token text.
    pub const fn as_str(self) -> &'static str {
        match self {
            SpecialToken::Pad => PAD_TOKEN,
            SpecialToken::Start => START_TOKEN,
            SpecialToken::End => END_TOKEN,
            SpecialToken::Unk => UNK_TOKEN,
        }
    }

    /// Look up the special token with the given text.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == token)
    }

    /// Whether `decode(.., remove_special = true)` drops this token.
    ///
    /// `<UNK>` stands in for content, and is always kept.
    pub const fn is_structural(self) -> bool {
        !matches!(self, SpecialToken::Unk)
    }
}

impl core::fmt::Display for SpecialToken {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_ids() {
        let ids: Vec<(usize, &str)> = SpecialToken::ALL
            .iter()
            .map(|s| (s.id(), s.as_str()))
            .collect();
        assert_eq!(
            ids,
            vec![(0, "<PAD>"), (1, "<START>"), (2, "<END>"), (3, "<UNK>")]
        );
    }

    #[test]
    fn test_from_token() {
        assert_eq!(SpecialToken::from_token("<END>"), Some(SpecialToken::End));
        assert_eq!(SpecialToken::from_token("end"), None);
        assert!(SpecialToken::Pad.is_structural());
        assert!(!SpecialToken::Unk.is_structural());
        assert_eq!(SpecialToken::Start.to_string(), "<START>");
    }
}
