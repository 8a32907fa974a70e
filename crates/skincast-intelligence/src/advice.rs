// ABOUTME: Literal advice blocks keyed by factor kind and, where it matters, severity tier
// ABOUTME: Supplies routine steps, products, lifestyle tips, warnings, and priority actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Skincast Contributors

//! Advice content.
//!
//! Content is fixed per factor; a score only decides which block applies.
//! Priority action strings echo the measured value or score for display.

use skincast_core::models::{FactorKind, FactorScore, ProductCategory, SeverityTier};

use ProductCategory::{Cleanser, Moisturizer, Other, Sunscreen, Treatment};

/// Fixed advice contributed by one factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdviceBlock {
    /// Skincare routine steps
    pub routine: &'static [&'static str],
    /// Products with their shelf
    pub products: &'static [(ProductCategory, &'static str)],
    /// Lifestyle tips
    pub lifestyle: &'static [&'static str],
    /// Warnings
    pub warnings: &'static [&'static str],
}

/// Lifestyle tips appended whenever at least one factor contributed
pub const GENERAL_LIFESTYLE_TIPS: &[&str] = &[
    "Stay hydrated - drink 8-10 glasses of water daily",
    "Get 7-9 hours of quality sleep for skin regeneration",
    "Eat antioxidant-rich foods (berries, leafy greens, nuts)",
    "Avoid smoking and excessive alcohol - damages skin",
    "Manage stress - cortisol affects skin health",
];

/// Warning appended whenever at least one factor contributed
pub const DISCLAIMER: &str =
    "This is automated advice. Consult a dermatologist for persistent or severe concerns.";

const UV_EXTREME: AdviceBlock = AdviceBlock {
    routine: &[],
    products: &[
        (Sunscreen, "SPF 50+ broad-spectrum sunscreen (PA++++)"),
        (Sunscreen, "Reapply sunscreen every 90 minutes"),
        (Other, "Wide-brimmed hat"),
        (Other, "UV-protective sunglasses"),
        (Other, "UPF-rated clothing for prolonged exposure"),
    ],
    lifestyle: &[],
    warnings: &["Extreme UV! Seek shade between 10 AM - 4 PM."],
};

const UV_HIGH: AdviceBlock = AdviceBlock {
    routine: &["High UV Index: Sun protection critical"],
    products: &[
        (Sunscreen, "SPF 40-50 broad-spectrum sunscreen"),
        (Treatment, "Antioxidant serum (Vitamin C or E) for UV defense"),
    ],
    lifestyle: &[],
    warnings: &[],
};

const UV_MODERATE: AdviceBlock = AdviceBlock {
    routine: &[],
    products: &[(Sunscreen, "SPF 30+ daily sunscreen")],
    lifestyle: &[],
    warnings: &[],
};

const UV_LOW: AdviceBlock = AdviceBlock {
    routine: &[],
    products: &[(Sunscreen, "SPF 15-30 daily moisturizer with sun protection")],
    lifestyle: &[],
    warnings: &[],
};

const UV_SNOW: AdviceBlock = AdviceBlock {
    routine: &[],
    products: &[(Sunscreen, "SPF 50+ (snow amplifies UV exposure)")],
    lifestyle: &[],
    warnings: &["Snow reflects up to 80% of UV rays! Double sun protection needed."],
};

/// Indicator the UV scorer attaches when snow reflection applies
const SNOW_INDICATOR: &str = "Snow Reflection";

const HUMIDITY_EXCESS: AdviceBlock = AdviceBlock {
    routine: &["High Humidity: Control excess oil and prevent breakouts"],
    products: &[
        (Cleanser, "Foaming gel cleanser with salicylic acid"),
        (Other, "Clay mask (use 2-3x per week)"),
        (Other, "Blotting papers for oil control"),
    ],
    lifestyle: &[],
    warnings: &["High humidity can increase oil production. Cleanse regularly."],
};

const HUMIDITY_ELEVATED: AdviceBlock = AdviceBlock {
    routine: &["Elevated Humidity: Use lightweight, non-comedogenic products"],
    products: &[(Sunscreen, "Non-comedogenic sunscreen")],
    lifestyle: &[],
    warnings: &[],
};

const HUMIDITY_DRY: AdviceBlock = AdviceBlock {
    routine: &["Low Humidity Alert: Extra hydration needed"],
    products: &[
        (Treatment, "Hyaluronic acid serum (holds 1000x its weight in water)"),
        (Other, "Indoor humidifier to maintain skin moisture"),
    ],
    lifestyle: &[],
    warnings: &[
        "Dry air accelerates moisture loss. Apply moisturizer within 60 seconds of washing.",
    ],
};

const TEMPERATURE_HEAT: AdviceBlock = AdviceBlock {
    routine: &["Hot Weather Protocol: Use lightweight, oil-free products"],
    products: &[
        (Moisturizer, "Gel-based moisturizer"),
        (Moisturizer, "Oil-free hydrating serum"),
        (Moisturizer, "Water-based lightweight lotion"),
    ],
    lifestyle: &["Stay hydrated! Drink at least 8 glasses of water daily in hot weather."],
    warnings: &["High temperature: Stay hydrated and avoid prolonged sun exposure."],
};

const TEMPERATURE_COLD: AdviceBlock = AdviceBlock {
    routine: &["Cold Weather Protocol: Apply rich, protective barrier cream"],
    products: &[
        (Moisturizer, "Heavy emollient moisturizer with ceramides"),
        (Moisturizer, "Facial oil (argan, rosehip, or jojoba)"),
        (Moisturizer, "Barrier repair cream with petrolatum"),
        (Other, "Lip balm with SPF"),
    ],
    lifestyle: &[],
    warnings: &[
        "Cold temperatures can damage skin barrier. Layer moisturizers for protection.",
        "Protect exposed skin from cold wind to prevent chapping.",
    ],
};

const TEMPERATURE_COOL: AdviceBlock = AdviceBlock {
    routine: &["Cool Weather: Maintain a balanced moisturizing routine"],
    products: &[
        (Moisturizer, "Cream moisturizer with ceramides"),
        (Other, "Lip balm with SPF"),
    ],
    lifestyle: &["Use a humidifier indoors when the heating is on"],
    warnings: &[],
};

const TEMPERATURE_MILD: AdviceBlock = AdviceBlock {
    routine: &["Moderate temperature: Use a lightweight moisturizer"],
    products: &[
        (Moisturizer, "Lightweight gel moisturizer"),
        (Moisturizer, "Medium-weight moisturizer on cooler days"),
    ],
    lifestyle: &[],
    warnings: &[],
};

const AIR_CLEAN: AdviceBlock = AdviceBlock {
    routine: &[],
    products: &[],
    lifestyle: &["Good air quality - Normal skincare routine sufficient."],
    warnings: &[],
};

const AIR_MODERATE: AdviceBlock = AdviceBlock {
    routine: &["Moderate Air Quality: Antioxidant protection recommended"],
    products: &[
        (Treatment, "Antioxidant serum (Vitamin C, E, or Ferulic Acid)"),
        (Cleanser, "Thorough cleansing after outdoor activities"),
    ],
    lifestyle: &[],
    warnings: &[],
};

const AIR_POLLUTED: AdviceBlock = AdviceBlock {
    routine: &[
        "Double cleanse to remove pollution particles",
        "Apply antioxidant serum before sunscreen",
        "Use barrier repair cream at night",
    ],
    products: &[
        (Cleanser, "Micellar water or oil cleanser (1st cleanse)"),
        (Cleanser, "Gentle foaming cleanser (2nd cleanse)"),
        (Treatment, "Vitamin C serum (antioxidant protection)"),
        (Treatment, "Niacinamide serum (barrier strengthening)"),
        (Treatment, "Pollution defense cream"),
    ],
    lifestyle: &["Minimize outdoor exposure during peak pollution hours."],
    warnings: &["Fine particles (PM2.5) can penetrate skin and accelerate aging."],
};

const WIND_STRONG: AdviceBlock = AdviceBlock {
    routine: &[],
    products: &[(Other, "Windproof barrier cream or balm")],
    lifestyle: &[],
    warnings: &["Strong winds can cause windburn and dehydration."],
};

const WIND_MODERATE: AdviceBlock = AdviceBlock {
    routine: &["Windy conditions: Protect skin barrier"],
    products: &[(Moisturizer, "Occlusive barrier cream")],
    lifestyle: &[],
    warnings: &["Strong winds can strip natural oils from skin."],
};

const PRECIPITATION: AdviceBlock = AdviceBlock {
    routine: &["Rainy weather: Dry skin folds thoroughly and change out of damp clothing"],
    products: &[(Sunscreen, "Water-resistant sunscreen (clouds don't block UV)")],
    lifestyle: &["Rainy weather can carry pollutants. Cleanse thoroughly after being outdoors."],
    warnings: &[],
};

const ACNE: AdviceBlock = AdviceBlock {
    routine: &[
        "Morning: Gentle cleanser -> Spot treatment -> Light moisturizer -> Sunscreen",
        "Evening: Cleanser -> Acne treatment -> Moisturizer",
        "Use non-comedogenic products only",
    ],
    products: &[
        (Cleanser, "Salicylic acid cleanser (2%) or Benzoyl peroxide (2.5-5%)"),
        (Treatment, "Benzoyl peroxide spot treatment"),
        (Treatment, "Niacinamide serum (reduces inflammation)"),
        (Treatment, "Retinoid cream (evening) - start slow"),
        (Moisturizer, "Oil-free, non-comedogenic gel moisturizer"),
    ],
    lifestyle: &[
        "Change pillowcases every 2-3 days",
        "Avoid touching your face throughout the day",
        "Remove makeup before sleeping",
    ],
    warnings: &["Avoid picking or squeezing acne - can cause scarring and infection."],
};

const PIGMENTATION: AdviceBlock = AdviceBlock {
    routine: &[
        "Morning: Cleanser -> Vitamin C serum -> Sunscreen (ESSENTIAL)",
        "Evening: Cleanser -> Treatment serum -> Retinol -> Moisturizer",
        "Consistency is key - results take 6-12 weeks",
    ],
    products: &[
        (Treatment, "Vitamin C serum 15-20% (morning)"),
        (Treatment, "Niacinamide 10% (reduces pigmentation)"),
        (Treatment, "Retinol 0.5-1% (evening - builds tolerance)"),
        (Treatment, "Alpha arbutin or kojic acid serum"),
        (Treatment, "Azelaic acid 10-20%"),
        (Sunscreen, "SPF 50+ (NON-NEGOTIABLE - prevents darkening)"),
    ],
    lifestyle: &["Wear hats and seek shade - physical protection helps"],
    warnings: &["Sun exposure will worsen pigmentation! Sunscreen is mandatory daily."],
};

const SUNBURN: AdviceBlock = AdviceBlock {
    routine: &[
        "IMMEDIATE: Apply cool compress for 10-15 minutes",
        "Apply aloe vera gel or hydrocortisone cream",
        "Avoid further sun exposure until healed",
        "Take ibuprofen if painful (reduces inflammation)",
    ],
    products: &[
        (Treatment, "Pure aloe vera gel (refrigerate for cooling effect)"),
        (Treatment, "Hydrocortisone cream 1% (for inflammation)"),
        (Treatment, "Hyaluronic acid serum (hydration)"),
        (Treatment, "Gentle, fragrance-free moisturizer"),
        (Other, "Oral antihistamine if itching is severe"),
    ],
    lifestyle: &[
        "Wear loose, breathable clothing",
        "Avoid hot showers - use cool/lukewarm water",
        "Sleep on your back to avoid pressure on burns",
    ],
    warnings: &[
        "Do NOT pop blisters if present - risk of infection",
        "Stay out of sun completely until healed",
        "Drink extra water - sunburn dehydrates body",
    ],
};

const FUNGAL_INFECTION: AdviceBlock = AdviceBlock {
    routine: &[
        "Keep affected area clean and dry",
        "Apply antifungal cream as prescribed",
        "Avoid sharing towels or personal items",
    ],
    products: &[
        (Treatment, "Antifungal cream (clotrimazole, miconazole) - OTC"),
        (Treatment, "Tea tree oil (diluted) - natural antifungal"),
        (Treatment, "Gentle, pH-balanced cleanser"),
    ],
    lifestyle: &[
        "Wash clothes and bedding in hot water",
        "Dry skin thoroughly after bathing",
        "Avoid excessive sweating (change clothes promptly)",
    ],
    warnings: &[
        "See a dermatologist for proper diagnosis",
        "Don't self-treat if unsure - incorrect treatment worsens condition",
        "Fungal infections are contagious - hygiene is critical",
    ],
};

const ECZEMA: AdviceBlock = AdviceBlock {
    routine: &[
        "Morning: Gentle cleanser -> Moisturizer -> Sunscreen",
        "Evening: Gentle cleanser -> Treatment -> Heavy moisturizer",
        "Apply moisturizer immediately after bathing (within 3 min)",
        "Moisturize at least 2-3 times daily",
    ],
    products: &[
        (Cleanser, "Fragrance-free, gentle cream cleanser (avoid soap)"),
        (Treatment, "Colloidal oatmeal cream (soothing)"),
        (Treatment, "Ceramide-rich barrier repair cream"),
        (Treatment, "Hydrocortisone 1% (short-term flare-ups)"),
        (Treatment, "Calamine lotion (for itching)"),
        (Moisturizer, "Thick ointment or cream (not lotion)"),
        (Moisturizer, "Petroleum jelly or healing ointment"),
        (Moisturizer, "Colloidal oatmeal eczema therapy cream"),
    ],
    lifestyle: &[
        "Wear soft, breathable cotton fabrics",
        "Use fragrance-free laundry detergent",
        "Identify and avoid triggers (stress, allergens)",
        "Use a humidifier in dry environments",
    ],
    warnings: &[
        "Avoid hot water - lukewarm only",
        "Don't scratch! Trim nails short",
        "Avoid fragrances, dyes, and harsh ingredients",
    ],
};

const DRYNESS: AdviceBlock = AdviceBlock {
    routine: &[
        "Apply moisturizer within 60 seconds of washing",
        "Layer products: serum -> moisturizer -> facial oil (optional)",
        "Use gentle, cream-based cleansers (avoid foaming)",
    ],
    products: &[
        (Cleanser, "Creamy, hydrating cleanser (no sulfates)"),
        (Treatment, "Hyaluronic acid serum (deep hydration)"),
        (Treatment, "Glycerin-based serum"),
        (Treatment, "Urea cream 5-10% (exfoliates + hydrates)"),
        (Moisturizer, "Rich cream with ceramides and fatty acids"),
        (Moisturizer, "Overnight sleeping mask or heavy cream"),
        (Moisturizer, "Facial oil: rosehip, argan, or jojoba"),
        (Other, "Room humidifier (especially winter months)"),
    ],
    lifestyle: &[
        "Drink 8+ glasses of water daily",
        "Limit hot showers (5-10 minutes max)",
        "Avoid alcohol-based products",
        "Eat omega-3 rich foods (fish, nuts, avocado)",
    ],
    warnings: &[],
};

const HEALTHY: AdviceBlock = AdviceBlock {
    routine: &[],
    products: &[],
    lifestyle: &["Skin appears healthy! Maintain your routine."],
    warnings: &[],
};

/// Advice blocks a factor contributes, in order
#[must_use]
pub fn blocks_for(factor: &FactorScore) -> Vec<&'static AdviceBlock> {
    let primary: &'static AdviceBlock = match factor.kind {
        FactorKind::Uv => match factor.severity {
            SeverityTier::Extreme => &UV_EXTREME,
            SeverityTier::High => &UV_HIGH,
            SeverityTier::Moderate => &UV_MODERATE,
            SeverityTier::Low => &UV_LOW,
        },
        FactorKind::HumidityExcess => &HUMIDITY_EXCESS,
        FactorKind::HumidityElevated => &HUMIDITY_ELEVATED,
        FactorKind::HumidityDry => &HUMIDITY_DRY,
        FactorKind::TemperatureHeat => &TEMPERATURE_HEAT,
        FactorKind::TemperatureCold => &TEMPERATURE_COLD,
        FactorKind::TemperatureCool => &TEMPERATURE_COOL,
        FactorKind::TemperatureMild => &TEMPERATURE_MILD,
        FactorKind::AirQuality => match factor.severity {
            SeverityTier::Extreme | SeverityTier::High => &AIR_POLLUTED,
            SeverityTier::Moderate => &AIR_MODERATE,
            SeverityTier::Low => &AIR_CLEAN,
        },
        FactorKind::Wind => {
            if factor.severity.is_elevated() {
                &WIND_STRONG
            } else {
                &WIND_MODERATE
            }
        }
        FactorKind::Precipitation => &PRECIPITATION,
        FactorKind::Acne => &ACNE,
        FactorKind::Pigmentation => &PIGMENTATION,
        FactorKind::Sunburn => &SUNBURN,
        FactorKind::FungalInfection => &FUNGAL_INFECTION,
        FactorKind::Eczema => &ECZEMA,
        FactorKind::Dryness => &DRYNESS,
        FactorKind::Healthy => &HEALTHY,
    };

    let mut blocks = vec![primary];
    if factor.kind == FactorKind::Uv
        && factor.indicators.iter().any(|indicator| indicator == SNOW_INDICATOR)
    {
        blocks.push(&UV_SNOW);
    }
    blocks
}

fn reading_text(factor: &FactorScore) -> String {
    factor
        .reading
        .map_or_else(|| "n/a".to_owned(), |reading| format!("{reading:.1}"))
}

/// Priority action for a factor, if it warrants one.
///
/// Image conditions other than healthy always get one; weather factors only
/// when their tier is high or extreme.
#[must_use]
pub fn priority_action(factor: &FactorScore) -> Option<String> {
    let score = factor.score;
    let severity = factor.severity.as_str().to_uppercase();

    let action = match factor.kind {
        FactorKind::Acne => format!("Acne Detected (Score: {score:.1}, Severity: {severity})"),
        FactorKind::Pigmentation => format!("Pigmentation Detected (Score: {score:.1})"),
        FactorKind::Sunburn => {
            format!("Sunburn Detected (Score: {score:.1}) - Immediate care needed!")
        }
        FactorKind::FungalInfection => format!(
            "Possible Fungal Infection (Score: {score:.1}) - Consult dermatologist!"
        ),
        FactorKind::Eczema => format!("Eczema Detected (Score: {score:.1})"),
        FactorKind::Dryness => format!("Dryness Detected (Score: {score:.1})"),
        FactorKind::Healthy => return None,
        _ if !factor.severity.is_elevated() => return None,
        FactorKind::Uv => format!(
            "URGENT: UV Index is {} ({}) - High sun damage risk!",
            reading_text(factor),
            factor.risk_label
        ),
        FactorKind::AirQuality => format!(
            "Poor Air Quality (AQI: {}) - Skin protection essential!",
            factor.risk_label
        ),
        FactorKind::HumidityExcess | FactorKind::HumidityElevated => format!(
            "High Humidity ({}%) - Cleanse twice daily and use non-comedogenic products!",
            reading_text(factor)
        ),
        FactorKind::HumidityDry => format!(
            "Very Dry Air ({}%) - Hydrate skin and lock in moisture!",
            reading_text(factor)
        ),
        FactorKind::TemperatureHeat | FactorKind::TemperatureMild => format!(
            "Heat Alert ({} °C) - Use oil-free products and stay hydrated!",
            reading_text(factor)
        ),
        FactorKind::TemperatureCold | FactorKind::TemperatureCool => format!(
            "Cold Alert ({} °C) - Cover exposed skin and layer moisturizers!",
            reading_text(factor)
        ),
        FactorKind::Wind => format!(
            "Strong Winds ({} m/s) - Windburn risk, apply a barrier balm!",
            reading_text(factor)
        ),
        FactorKind::Precipitation => format!(
            "{} ({}) - Keep skin dry to prevent maceration!",
            factor.name, factor.risk_label
        ),
    };
    Some(action)
}
