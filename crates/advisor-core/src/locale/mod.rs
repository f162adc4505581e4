//! Localized text tables.
//!
//! Every user-facing string lives here, one table per [`Language`]. The
//! resolver, composer and follow-up rule are written once and look their
//! words and sentences up through [`Language::text`] and the template
//! helpers in [`templates`].

mod ar;
mod en;
pub mod templates;

use crate::language::Language;
use crate::resolver::KeywordRule;

/// Trigger words consulted by the resolver and follow-up rule.
///
/// All words are lowercase and matched as substrings of the lowercased input.
#[derive(Debug)]
pub struct Triggers {
    /// Any of these, with an active routine, routes to the follow-up rule
    pub routine: &'static [&'static str],
    /// Any of these asks for the selection summary
    pub selection: &'static [&'static str],
    /// All of these together ask how to use the selected products
    pub usage_question: &'static [&'static str],
    /// Any of these asks about timing
    pub timing_question: &'static [&'static str],
    pub morning: &'static [&'static str],
    pub evening: &'static [&'static str],
    pub order: &'static [&'static str],
    pub frequency: &'static [&'static str],
}

/// Static strings of one language.
#[derive(Debug)]
pub struct LocaleText {
    pub triggers: Triggers,
    /// Ordered keyword table; earlier entries win
    pub keyword_rules: &'static [KeywordRule],
    /// Fallback answers, one picked at random
    pub fallbacks: &'static [&'static str],

    pub nothing_selected_answer: &'static str,
    pub timing_answer: &'static str,

    pub no_routine_answer: &'static str,
    pub morning_header: &'static str,
    pub evening_header: &'static str,
    pub missing_morning_answer: &'static str,
    pub missing_evening_answer: &'static str,
    pub order_answer: &'static str,
    pub frequency_answer: &'static str,
    pub follow_up_pointer: &'static str,

    pub routine_title: &'static str,
    pub base_tips: &'static [&'static str],
    pub skincare_tip: &'static str,
    pub haircare_tip: &'static str,
    /// Not every table carries the multi-brand tip
    pub multi_brand_tip: Option<&'static str>,
    pub tips_heading: &'static str,

    pub welcome: &'static str,
    pub category_prompt: &'static str,
    pub empty_category: &'static str,
    pub no_products_selected: &'static str,
    pub clear_all_label: &'static str,
    pub generate_label: &'static str,
    pub generate_rejected: &'static str,
    pub generating: &'static str,
    pub routine_ready: &'static str,
    pub language_changed: &'static str,
    pub show_details_label: &'static str,
}

impl Language {
    /// Returns the static text table of this language.
    pub fn text(self) -> &'static LocaleText {
        match self {
            Language::English => &en::TEXT,
            Language::Arabic => &ar::TEXT,
        }
    }
}
