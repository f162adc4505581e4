//! Routine domain models.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// The fixed routine sections, in the order they are evaluated and emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Morning,
    Evening,
    Hair,
    Makeup,
    Special,
}

/// A named sub-role within a section. Each role contributes at most one
/// sentence per section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepRole {
    MorningCleanser,
    VitaminC,
    DayMoisturizer,
    Spf,
    EveningCleanser,
    Retinol,
    NightMoisturizer,
    EyeCare,
    Shampoo,
    Conditioner,
    HairColor,
    HairStyling,
    Foundation,
    Eyeshadow,
    Mascara,
    Lipstick,
    Suncare,
    MensGrooming,
    Fragrance,
}

/// One titled block of ordered step sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineSection {
    pub kind: SectionKind,
    pub title: String,
    pub steps: Vec<String>,
}

/// A generated routine. Ephemeral: rebuilt on every request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub language: Language,
    pub title: String,
    pub intro: String,
    pub sections: Vec<RoutineSection>,
    pub tips: Vec<String>,
}

impl Routine {
    /// Finds the section of the given kind, if the routine has one.
    pub fn section(&self, kind: SectionKind) -> Option<&RoutineSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }
}
