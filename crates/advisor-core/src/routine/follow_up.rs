//! Questions about an already generated routine.

use super::model::{Routine, SectionKind};
use crate::language::Language;
use crate::locale::LocaleText;
use crate::resolver::contains_any;

/// Answers a routine question from the active routine.
///
/// `input` must already be lowercased. Sections are found by kind, so the
/// answer does not depend on the localized section titles.
pub fn follow_up(input: &str, routine: Option<&Routine>, language: Language) -> String {
    let text = language.text();
    let Some(routine) = routine else {
        return text.no_routine_answer.to_string();
    };
    let triggers = &text.triggers;

    if contains_any(input, triggers.morning) {
        return section_answer(routine, SectionKind::Morning, text);
    }
    if contains_any(input, triggers.evening) {
        return section_answer(routine, SectionKind::Evening, text);
    }
    if contains_any(input, triggers.order) {
        return text.order_answer.to_string();
    }
    if contains_any(input, triggers.frequency) {
        return text.frequency_answer.to_string();
    }
    text.follow_up_pointer.to_string()
}

fn section_answer(routine: &Routine, kind: SectionKind, text: &LocaleText) -> String {
    let (header, missing) = match kind {
        SectionKind::Morning => (text.morning_header, text.missing_morning_answer),
        _ => (text.evening_header, text.missing_evening_answer),
    };

    match routine.section(kind) {
        Some(section) => {
            let mut lines = vec![header.to_string()];
            lines.extend(
                section
                    .steps
                    .iter()
                    .enumerate()
                    .map(|(i, step)| format!("{}. {}", i + 1, step)),
            );
            lines.join("\n")
        }
        None => missing.to_string(),
    }
}
