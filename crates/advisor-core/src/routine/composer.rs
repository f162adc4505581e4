//! Routine composition.
//!
//! A routine is assembled from a fixed recipe: every section has an admission
//! predicate that builds its bucket from the selection, and an ordered list of
//! roles. Each role picks the first product in the bucket matching one of its
//! candidate predicates (tried in order) and contributes one sentence.
//!
//! Buckets overlap on purpose: a cleanser or moisturizer lands in both the
//! morning and the evening section.

use tracing::debug;

use super::model::{Routine, RoutineSection, SectionKind, StepRole};
use crate::error::{AdvisorError, Result};
use crate::language::Language;
use crate::product::{Category, Product};
use crate::selection::distinct_brands;

type Predicate = fn(&Product) -> bool;

struct RoleRule {
    role: StepRole,
    /// Alternatives tried in order; the first one with a match wins
    candidates: &'static [Predicate],
}

struct SectionRule {
    kind: SectionKind,
    admits: Predicate,
    roles: &'static [RoleRule],
}

const SECTION_RULES: &[SectionRule] = &[
    SectionRule {
        kind: SectionKind::Morning,
        admits: admits_morning,
        roles: &[
            RoleRule { role: StepRole::MorningCleanser, candidates: &[is_cleanser] },
            RoleRule { role: StepRole::VitaminC, candidates: &[named_vitamin_c] },
            RoleRule { role: StepRole::DayMoisturizer, candidates: &[is_day_moisturizer] },
            RoleRule { role: StepRole::Spf, candidates: &[named_spf] },
        ],
    },
    SectionRule {
        kind: SectionKind::Evening,
        admits: admits_evening,
        roles: &[
            RoleRule { role: StepRole::EveningCleanser, candidates: &[is_cleanser] },
            RoleRule { role: StepRole::Retinol, candidates: &[named_retinol] },
            RoleRule {
                role: StepRole::NightMoisturizer,
                candidates: &[is_night_moisturizer, is_moisturizer],
            },
            RoleRule { role: StepRole::EyeCare, candidates: &[named_eye] },
        ],
    },
    SectionRule {
        kind: SectionKind::Hair,
        admits: admits_hair,
        roles: &[
            RoleRule { role: StepRole::Shampoo, candidates: &[named_shampoo] },
            RoleRule { role: StepRole::Conditioner, candidates: &[named_conditioner] },
            RoleRule { role: StepRole::HairColor, candidates: &[is_hair_color] },
            RoleRule { role: StepRole::HairStyling, candidates: &[is_hair_styling] },
        ],
    },
    SectionRule {
        kind: SectionKind::Makeup,
        admits: is_makeup,
        roles: &[
            RoleRule { role: StepRole::Foundation, candidates: &[named_foundation] },
            RoleRule { role: StepRole::Eyeshadow, candidates: &[named_eyeshadow] },
            RoleRule { role: StepRole::Mascara, candidates: &[named_mascara] },
            RoleRule { role: StepRole::Lipstick, candidates: &[named_lipstick] },
        ],
    },
    SectionRule {
        kind: SectionKind::Special,
        admits: admits_special,
        roles: &[
            RoleRule { role: StepRole::Suncare, candidates: &[is_suncare] },
            RoleRule { role: StepRole::MensGrooming, candidates: &[is_mens_grooming] },
            RoleRule { role: StepRole::Fragrance, candidates: &[is_fragrance] },
        ],
    },
];

// Admission predicates

fn admits_morning(p: &Product) -> bool {
    is_cleanser(p)
        || is_moisturizer(p)
        || (p.is(Category::Skincare) && (named_vitamin_c(p) || named_spf(p)))
        || named_spf(p)
}

fn admits_evening(p: &Product) -> bool {
    is_cleanser(p)
        || is_moisturizer(p)
        || (p.is(Category::Skincare) && (named_retinol(p) || p.name_contains("PM")))
}

fn admits_hair(p: &Product) -> bool {
    p.category.is_hair()
}

fn admits_special(p: &Product) -> bool {
    is_suncare(p) || is_mens_grooming(p) || is_fragrance(p)
}

// Role predicates

fn is_cleanser(p: &Product) -> bool {
    p.is(Category::Cleanser)
}

fn is_moisturizer(p: &Product) -> bool {
    p.is(Category::Moisturizer)
}

fn is_day_moisturizer(p: &Product) -> bool {
    is_moisturizer(p) && !p.name_contains("PM")
}

fn is_night_moisturizer(p: &Product) -> bool {
    is_moisturizer(p) && p.name_contains("PM")
}

fn named_vitamin_c(p: &Product) -> bool {
    p.name_contains("Vitamin C")
}

fn named_spf(p: &Product) -> bool {
    p.name_contains("SPF")
}

fn named_retinol(p: &Product) -> bool {
    p.name_contains("Retinol")
}

fn named_eye(p: &Product) -> bool {
    p.name_contains("Eye")
}

fn named_shampoo(p: &Product) -> bool {
    p.name_contains("Shampoo")
}

fn named_conditioner(p: &Product) -> bool {
    p.name_contains("Conditioner")
}

fn is_hair_color(p: &Product) -> bool {
    p.is(Category::HairColor)
}

fn is_hair_styling(p: &Product) -> bool {
    p.is(Category::HairStyling)
}

fn is_makeup(p: &Product) -> bool {
    p.is(Category::Makeup)
}

fn named_foundation(p: &Product) -> bool {
    p.name_contains("Foundation")
}

fn named_eyeshadow(p: &Product) -> bool {
    p.name_contains("Eyeshadow") || p.name_contains("Naked")
}

fn named_mascara(p: &Product) -> bool {
    p.name_contains("Mascara")
}

fn named_lipstick(p: &Product) -> bool {
    p.name_contains("Lipstick") || p.name_contains("Rouge")
}

fn is_suncare(p: &Product) -> bool {
    p.is(Category::Suncare)
}

fn is_mens_grooming(p: &Product) -> bool {
    p.is(Category::MensGrooming)
}

fn is_fragrance(p: &Product) -> bool {
    p.is(Category::Fragrance)
}

/// Builds a routine for a non-empty selection.
///
/// Returns [`AdvisorError::EmptySelection`] when `products` is empty; callers
/// are expected to gate generation before getting here.
pub fn compose(products: &[Product], language: Language) -> Result<Routine> {
    if products.is_empty() {
        return Err(AdvisorError::EmptySelection);
    }

    let text = language.text();
    let brands = distinct_brands(products);

    let sections: Vec<RoutineSection> = SECTION_RULES
        .iter()
        .filter_map(|rule| build_section(rule, products, language))
        .collect();

    debug!(
        products = products.len(),
        sections = sections.len(),
        language = language.code(),
        "Composed routine"
    );

    Ok(Routine {
        language,
        title: text.routine_title.to_string(),
        intro: language.routine_intro(products.len(), &brands),
        sections,
        tips: compose_tips(products, brands.len(), language),
    })
}

fn build_section(
    rule: &SectionRule,
    products: &[Product],
    language: Language,
) -> Option<RoutineSection> {
    let bucket: Vec<&Product> = products.iter().filter(|p| (rule.admits)(p)).collect();
    if bucket.is_empty() {
        return None;
    }

    let mut steps: Vec<String> = rule
        .roles
        .iter()
        .filter_map(|role| {
            role.candidates
                .iter()
                .find_map(|candidate| bucket.iter().find(|p| candidate(p)))
                .map(|p| language.step_sentence(role.role, &p.name))
        })
        .collect();

    if steps.is_empty() {
        steps.push(language.section_fallback(rule.kind)?.to_string());
    }

    Some(RoutineSection {
        kind: rule.kind,
        title: language.section_title(rule.kind).to_string(),
        steps,
    })
}

fn compose_tips(products: &[Product], brand_count: usize, language: Language) -> Vec<String> {
    let text = language.text();
    let mut tips: Vec<String> = text.base_tips.iter().map(|t| t.to_string()).collect();

    if products.iter().any(|p| p.is(Category::Skincare)) {
        tips.push(text.skincare_tip.to_string());
    }
    if products.iter().any(|p| p.is(Category::Haircare)) {
        tips.push(text.haircare_tip.to_string());
    }
    if brand_count > 1 {
        if let Some(tip) = text.multi_brand_tip {
            tips.push(tip.to_string());
        }
    }

    tips
}
