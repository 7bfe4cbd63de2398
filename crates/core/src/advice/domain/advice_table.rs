use serde::Serialize;

use crate::detection::domain::skin_condition::SkinCondition;

/// Care guidance for one skin condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ConditionAdvice {
    pub advice: &'static str,
    pub products: &'static [&'static str],
    pub prevention: &'static [&'static str],
}

/// Returned for names outside the known conditions.
pub const NO_ADVICE: ConditionAdvice = ConditionAdvice {
    advice: "No specific advice available for this condition.",
    products: &[],
    prevention: &[],
};

const ACNE: ConditionAdvice = ConditionAdvice {
    advice: "Keep your skin clean, avoid harsh scrubbing, and avoid touching your face frequently.",
    products: &[
        "Salicylic Acid Cleanser",
        "Benzoyl Peroxide Cream",
        "Non-comedogenic Moisturizer",
    ],
    prevention: &[
        "Wash your face twice daily with a mild cleanser.",
        "Avoid oily makeup products.",
        "Maintain a balanced diet with less sugar and processed foods.",
    ],
};

const WRINKLES: ConditionAdvice = ConditionAdvice {
    advice: "Stay hydrated, use sunscreen daily, and consider anti-aging products.",
    products: &[
        "Retinol Serum",
        "Vitamin C Cream",
        "Broad-Spectrum SPF 30+ Sunscreen",
    ],
    prevention: &[
        "Avoid prolonged sun exposure.",
        "Use a daily moisturizer with antioxidants.",
        "Quit smoking to prevent premature aging.",
    ],
};

const DRY: ConditionAdvice = ConditionAdvice {
    advice: "Use gentle, hydrating products and avoid hot showers.",
    products: &[
        "Hyaluronic Acid Serum",
        "Ceramide-based Moisturizer",
        "Gentle Cream Cleanser",
    ],
    prevention: &[
        "Drink plenty of water.",
        "Use a humidifier in dry environments.",
        "Avoid using strong soaps or alcohol-based toners.",
    ],
};

const OILY: ConditionAdvice = ConditionAdvice {
    advice: "Keep your skin clean and use oil-free, mattifying products.",
    products: &[
        "Oil-Free Gel Moisturizer",
        "Clay Mask",
        "Niacinamide Serum",
    ],
    prevention: &[
        "Avoid overwashing your face, as it can cause more oil production.",
        "Blot your skin with oil-absorbing sheets.",
        "Use lightweight, non-comedogenic products.",
    ],
};

const EYEBAG: ConditionAdvice = ConditionAdvice {
    advice: "Get enough sleep, stay hydrated, and use eye-specific skincare products.",
    products: &[
        "Caffeine Eye Cream",
        "Cold Compress Gel Mask",
        "Hyaluronic Acid Eye Serum",
    ],
    prevention: &[
        "Sleep for 7-8 hours daily.",
        "Reduce salt intake to prevent fluid retention.",
        "Apply cold compresses to reduce puffiness.",
    ],
};

const NORMAL: ConditionAdvice = ConditionAdvice {
    advice: "Maintain your skin's natural balance with gentle, nourishing products.",
    products: &[
        "Daily Moisturizer with SPF",
        "Gentle Cleanser",
        "Vitamin E Cream",
    ],
    prevention: &[
        "Stick to a simple skincare routine.",
        "Avoid overusing harsh treatments.",
        "Protect your skin from environmental damage.",
    ],
};

impl SkinCondition {
    pub fn advice(self) -> ConditionAdvice {
        match self {
            SkinCondition::Acne => ACNE,
            SkinCondition::Dry => DRY,
            SkinCondition::Eyebag => EYEBAG,
            SkinCondition::Normal => NORMAL,
            SkinCondition::Oily => OILY,
            SkinCondition::Wrinkles => WRINKLES,
        }
    }
}

/// Case-insensitive lookup by condition name.
///
/// Unknown names (including "Unknown") get [`NO_ADVICE`] rather than an error.
pub fn advice_for(name: &str) -> ConditionAdvice {
    SkinCondition::from_label(name)
        .map(SkinCondition::advice)
        .unwrap_or(NO_ADVICE)
}
