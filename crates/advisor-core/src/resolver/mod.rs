//! Chat response resolution.
//!
//! [`resolve`] runs a fixed sequence of stages over the lowercased input and
//! returns the first answer produced:
//!
//! 1. routine questions, when a routine has been generated
//! 2. "what did I select" questions
//! 3. the language's ordered keyword table
//! 4. usage and timing questions, when the selection is non-empty
//! 5. a random fallback answer
//!
//! Every stage reads its words from the language's [`LocaleText`](crate::locale::LocaleText),
//! so the same pipeline serves every language.

mod rules;

pub use rules::{KeywordRule, first_match};
pub(crate) use rules::{contains_all, contains_any};

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::language::Language;
use crate::product::Product;
use crate::routine::{Routine, follow_up};
use crate::selection::categories_of;

/// Read-only view of the session state a reply may depend on.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    pub selection: &'a [Product],
    pub active_routine: Option<&'a Routine>,
    pub language: Language,
}

impl<'a> ResolveContext<'a> {
    pub fn new(selection: &'a [Product], language: Language) -> Self {
        Self {
            selection,
            active_routine: None,
            language,
        }
    }

    pub fn with_routine(mut self, routine: Option<&'a Routine>) -> Self {
        self.active_routine = routine;
        self
    }
}

/// Resolves a reply using the thread-local random source for fallbacks.
pub fn resolve(input: &str, context: &ResolveContext<'_>) -> String {
    resolve_with(input, context, &mut rand::thread_rng())
}

/// Resolves a reply, drawing fallback picks from `rng`.
///
/// Total: every input gets an answer. Callers pass trimmed, non-empty text.
pub fn resolve_with<R: Rng + ?Sized>(
    input: &str,
    context: &ResolveContext<'_>,
    rng: &mut R,
) -> String {
    let lowered = input.to_lowercase();
    let language = context.language;
    let text = language.text();
    let triggers = &text.triggers;

    if let Some(routine) = context.active_routine {
        if contains_any(&lowered, triggers.routine) {
            debug!(stage = "follow_up", "Resolved chat input");
            return follow_up(&lowered, Some(routine), language);
        }
    }

    if contains_any(&lowered, triggers.selection) {
        debug!(stage = "selection", "Resolved chat input");
        if context.selection.is_empty() {
            return text.nothing_selected_answer.to_string();
        }
        return language.selection_summary(context.selection);
    }

    if let Some(rule) = first_match(text.keyword_rules, &lowered) {
        debug!(stage = "keyword", keyword = rule.keyword, "Resolved chat input");
        return rule.response.to_string();
    }

    if !context.selection.is_empty() {
        if contains_all(&lowered, triggers.usage_question) {
            debug!(stage = "usage", "Resolved chat input");
            return language.usage_prompt(&categories_of(context.selection));
        }
        if contains_any(&lowered, triggers.timing_question) {
            debug!(stage = "timing", "Resolved chat input");
            return text.timing_answer.to_string();
        }
    }

    debug!(stage = "fallback", "Resolved chat input");
    text.fallbacks
        .choose(rng)
        .map(|answer| answer.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Category;
    use crate::routine::compose;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn product(id: u32, name: &str, brand: &str, category: Category) -> Product {
        Product {
            id,
            name: name.to_string(),
            brand: brand.to_string(),
            category,
            image: String::new(),
            description: String::new(),
        }
    }

    fn selection() -> Vec<Product> {
        vec![
            product(1, "Foaming Facial Cleanser", "CeraVe", Category::Cleanser),
            product(2, "Daily Moisturizing Lotion", "CeraVe", Category::Moisturizer),
            product(3, "Foaming Facial Cleanser Duo", "CeraVe", Category::Cleanser),
        ]
    }

    #[test]
    fn test_unmatched_input_returns_a_fallback() {
        let context = ResolveContext::new(&[], Language::English);
        let fallbacks = Language::English.text().fallbacks;
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let answer = resolve_with("xyz", &context, &mut rng);
            assert!(fallbacks.contains(&answer.as_str()), "unexpected: {}", answer);
        }
    }

    #[test]
    fn test_greeting_wins_over_later_keyword() {
        let context = ResolveContext::new(&[], Language::English);
        let answer = resolve("Hello, what moisturizer should I use?", &context);
        assert_eq!(
            answer,
            "Hello! I'm here to help you with your beauty routine. What would you like to know?"
        );
    }

    #[test]
    fn test_table_order_beats_input_position() {
        let context = ResolveContext::new(&[], Language::English);
        let answer = resolve("Tell me about mascara and cleanser", &context);
        assert!(answer.starts_with("Cleansers remove dirt"));
    }

    #[test]
    fn test_selection_summary() {
        let products = selection();
        let context = ResolveContext::new(&products, Language::English);
        let answer = resolve("What have I selected?", &context);
        assert!(answer.starts_with("You've selected 3 products: Foaming Facial Cleanser by CeraVe"));

        let empty = ResolveContext::new(&[], Language::English);
        assert_eq!(
            resolve("What have I selected?", &empty),
            Language::English.text().nothing_selected_answer
        );
    }

    #[test]
    fn test_usage_prompt_lists_distinct_categories() {
        let products = selection();
        let context = ResolveContext::new(&products, Language::English);
        let answer = resolve("How do I use these products?", &context);
        assert!(answer.starts_with("Based on your selected cleanser and moisturizer products"));
    }

    #[test]
    fn test_timing_needs_a_selection() {
        let products = selection();
        let context = ResolveContext::new(&products, Language::English);
        assert_eq!(
            resolve("When should I apply them?", &context),
            Language::English.text().timing_answer
        );

        let empty = ResolveContext::new(&[], Language::English);
        let answer = resolve("When should I apply them?", &empty);
        assert!(Language::English.text().fallbacks.contains(&answer.as_str()));
    }

    #[test]
    fn test_routine_questions_need_an_active_routine() {
        let products = selection();
        let routine = compose(&products, Language::English).unwrap();

        let context = ResolveContext::new(&products, Language::English).with_routine(Some(&routine));
        let answer = resolve("Walk me through my morning routine", &context);
        assert!(answer.starts_with("Here's your morning routine:\n1. Start with Foaming Facial Cleanser"));

        // Without a routine the keyword table answers instead.
        let context = ResolveContext::new(&products, Language::English);
        let answer = resolve("Walk me through my morning routine", &context);
        assert!(answer.starts_with("A good morning routine"));
    }

    #[test]
    fn test_arabic_pipeline() {
        let products = selection();
        let context = ResolveContext::new(&products, Language::Arabic);
        assert!(resolve("ما هو المرطب الأفضل", &context).starts_with("المرطبات"));
        assert!(resolve("ما المنتجات المختارة", &context).starts_with("لقد اخترت 3 منتجات"));
        assert_eq!(
            resolve("متى أطبقها", &context),
            Language::Arabic.text().timing_answer
        );
    }
}
