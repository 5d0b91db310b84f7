//! Weight vocabulary for the store's bag-size radio options.
//!
//! The storefront encodes each package size as a slug in the `value`
//! attribute of an `attribute_pa_weight` radio input. Only the four sizes
//! below are sold; anything else has no label and is ignored by the
//! classifier.

use std::fmt;
use std::str::FromStr;

/// Canonical bag weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightLabel {
    TwoAndAHalfPound,
    FivePound,
    TwentyFivePound,
    FiftyPound,
}

/// Option code → label. Codes are matched byte-for-byte.
const VOCABULARY: [(&str, WeightLabel); 4] = [
    ("2-5-lb-bag-1-13-kg", WeightLabel::TwoAndAHalfPound),
    ("5-lb-bag-2-26-kg", WeightLabel::FivePound),
    ("25-lb-bag-11-34-kg", WeightLabel::TwentyFivePound),
    ("50-lb-bag-22-68-kg", WeightLabel::FiftyPound),
];

impl WeightLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WeightLabel::TwoAndAHalfPound => "2.5lb",
            WeightLabel::FivePound => "5lb",
            WeightLabel::TwentyFivePound => "25lb",
            WeightLabel::FiftyPound => "50lb",
        }
    }

    /// The option code the storefront uses for this weight.
    #[must_use]
    pub fn option_code(self) -> &'static str {
        VOCABULARY
            .iter()
            .find(|(_, label)| *label == self)
            .map_or("", |(code, _)| code)
    }
}

impl fmt::Display for WeightLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2.5lb" => Ok(WeightLabel::TwoAndAHalfPound),
            "5lb" => Ok(WeightLabel::FivePound),
            "25lb" => Ok(WeightLabel::TwentyFivePound),
            "50lb" => Ok(WeightLabel::FiftyPound),
            other => Err(format!("unknown weight label \"{other}\"")),
        }
    }
}

/// Maps a storefront option code to its weight label.
///
/// Returns `None` for codes outside the vocabulary.
#[must_use]
pub fn label_of(code: &str) -> Option<WeightLabel> {
    VOCABULARY
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
}
