use std::fmt;

use crate::shared::constants::UNKNOWN_LABEL;

/// The skin states the detector was trained on, in class-id order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkinCondition {
    Acne,
    Dry,
    Eyebag,
    Normal,
    Oily,
    Wrinkles,
}

impl SkinCondition {
    pub const ALL: &[SkinCondition] = &[
        SkinCondition::Acne,
        SkinCondition::Dry,
        SkinCondition::Eyebag,
        SkinCondition::Normal,
        SkinCondition::Oily,
        SkinCondition::Wrinkles,
    ];

    pub fn from_class_id(class_id: i64) -> Option<Self> {
        usize::try_from(class_id)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn class_id(self) -> i64 {
        self as i64
    }

    pub fn label(self) -> &'static str {
        match self {
            SkinCondition::Acne => "acne",
            SkinCondition::Dry => "dry",
            SkinCondition::Eyebag => "eyebag",
            SkinCondition::Normal => "normal",
            SkinCondition::Oily => "oily",
            SkinCondition::Wrinkles => "wrinkles",
        }
    }

    /// Case-insensitive parse of a label.
    pub fn from_label(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL.iter().copied().find(|c| c.label() == lower)
    }
}

impl fmt::Display for SkinCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display name for any class id the model may emit; never empty.
pub fn class_name(class_id: i64) -> &'static str {
    SkinCondition::from_class_id(class_id)
        .map(SkinCondition::label)
        .unwrap_or(UNKNOWN_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "acne")]
    #[case(1, "dry")]
    #[case(2, "eyebag")]
    #[case(3, "normal")]
    #[case(4, "oily")]
    #[case(5, "wrinkles")]
    fn test_known_class_ids(#[case] id: i64, #[case] expected: &str) {
        assert_eq!(class_name(id), expected);
    }

    #[rstest]
    #[case::negative(-1)]
    #[case::just_past_end(6)]
    #[case::large(1_000)]
    fn test_unknown_class_ids_fall_back(#[case] id: i64) {
        assert_eq!(class_name(id), "Unknown");
    }

    #[test]
    fn test_class_id_round_trips_through_enum() {
        for condition in SkinCondition::ALL {
            assert_eq!(
                SkinCondition::from_class_id(condition.class_id()),
                Some(*condition)
            );
        }
    }

    #[test]
    fn test_resolved_names_are_never_empty() {
        for id in -3..10 {
            assert!(!class_name(id).is_empty());
        }
    }

    #[test]
    fn test_from_label_ignores_case() {
        assert_eq!(SkinCondition::from_label("ACNE"), Some(SkinCondition::Acne));
        assert_eq!(SkinCondition::from_label("EyeBag"), Some(SkinCondition::Eyebag));
        assert_eq!(SkinCondition::from_label("Unknown"), None);
    }
}
