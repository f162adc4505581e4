//! The advisor session use case.
//!
//! `AdvisorSession` owns all mutable state of one user session: the selection,
//! the language, the active routine and the conversation log. Every user
//! control maps to one method; persistence happens inside the method that
//! mutates.

use std::sync::Arc;
use std::time::Duration;

use advisor_core::config::PacingConfig;
use advisor_core::conversation::{BotReply, ChatMessage, ConversationLog, ConversationTurn};
use advisor_core::error::{AdvisorError, Result};
use advisor_core::language::Language;
use advisor_core::product::{Catalog, CatalogRepository, Category, Product};
use advisor_core::resolver::{ResolveContext, resolve_with};
use advisor_core::routine::{Routine, compose};
use advisor_core::selection::{Selection, Toggle};
use advisor_core::state::StateStore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};

use crate::script::ReplyScript;

/// Outcome of a mutation whose in-memory effect always stands, even when
/// writing it to storage failed.
#[derive(Debug)]
pub struct Persisted<T> {
    pub value: T,
    pub save_error: Option<AdvisorError>,
}

impl<T> Persisted<T> {
    fn new(value: T, saved: Result<()>) -> Self {
        let save_error = saved.err();
        if let Some(e) = &save_error {
            error!(error = %e, "Failed to persist state");
        }
        Self { value, save_error }
    }
}

/// A catalog product as listed under the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<'a> {
    pub product: &'a Product,
    pub selected: bool,
}

/// One row of the selection panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelItem {
    pub id: u32,
    pub name: String,
    pub brand: String,
}

/// What the selection panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPanel {
    pub items: Vec<PanelItem>,
    /// Shown instead of the list when nothing is selected
    pub empty_label: Option<&'static str>,
    /// The clear-all control is offered for more than one item
    pub show_clear_all: bool,
    pub generate_enabled: bool,
}

/// Result of pressing the generate control.
#[derive(Debug)]
pub enum GenerateOutcome {
    /// Nothing selected; no routine was built
    Rejected(&'static str),
    Scheduled(ReplyScript),
}

pub struct AdvisorSession {
    catalog: Arc<Catalog>,
    store: StateStore,
    pacing: PacingConfig,
    selection: Selection,
    language: Language,
    active_routine: Option<Routine>,
    log: ConversationLog,
    rng: StdRng,
}

impl AdvisorSession {
    /// Loads the catalog and restores the persisted selection and language.
    ///
    /// A catalog that cannot be loaded is an error; stored state never is.
    pub fn restore(
        catalog_repository: &dyn CatalogRepository,
        store: StateStore,
        pacing: PacingConfig,
    ) -> Result<Self> {
        let catalog = catalog_repository.load()?;
        let selection = store.load_selection();
        let language = store.load_language();

        info!(
            products = catalog.len(),
            selected = selection.len(),
            language = language.code(),
            "Session restored"
        );

        Ok(Self {
            catalog,
            store,
            pacing,
            selection,
            language,
            active_routine: None,
            log: ConversationLog::new(),
            rng: StdRng::from_entropy(),
        })
    }

    /// Replaces the fallback random source with a seeded one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_routine(&self) -> Option<&Routine> {
        self.active_routine.as_ref()
    }

    pub fn history(&self) -> &[ConversationTurn] {
        self.log.turns()
    }

    pub fn welcome(&self) -> &'static str {
        self.language.text().welcome
    }

    /// Products of one category in catalog order, with selection markers.
    pub fn products_in(&self, category: Category) -> Vec<CatalogEntry<'_>> {
        self.catalog
            .in_category(category)
            .into_iter()
            .map(|product| CatalogEntry {
                product,
                selected: self.selection.contains(product.id),
            })
            .collect()
    }

    /// Looks up a catalog product for the details view.
    pub fn product(&self, id: u32) -> Result<&Product> {
        self.catalog
            .find(id)
            .ok_or_else(|| AdvisorError::not_found("product", id.to_string()))
    }

    /// Adds or removes a catalog product.
    pub fn toggle_product(&mut self, id: u32) -> Result<Persisted<(Toggle, Product)>> {
        let product = self.product(id)?.clone();
        let change = self.selection.toggle(&product);
        info!(id, ?change, "Toggled product");

        let saved = self.store.save_selection(&self.selection);
        Ok(Persisted::new((change, product), saved))
    }

    /// Removes a selected product.
    pub fn remove_product(&mut self, id: u32) -> Result<Persisted<Product>> {
        let removed = self
            .selection
            .remove(id)
            .ok_or_else(|| AdvisorError::not_found("selected product", id.to_string()))?;
        info!(id, "Removed product");

        let saved = self.store.save_selection(&self.selection);
        Ok(Persisted::new(removed, saved))
    }

    /// Empties the selection. Returns how many products were removed.
    pub fn clear_selection(&mut self) -> Persisted<usize> {
        let count = self.selection.len();
        self.selection.clear();
        info!(count, "Cleared selection");

        let saved = self.store.save_selection(&self.selection);
        Persisted::new(count, saved)
    }

    pub fn selection_panel(&self) -> SelectionPanel {
        let items: Vec<PanelItem> = self
            .selection
            .products()
            .iter()
            .map(|p| PanelItem {
                id: p.id,
                name: p.name.clone(),
                brand: p.brand.clone(),
            })
            .collect();

        SelectionPanel {
            empty_label: items
                .is_empty()
                .then_some(self.language.text().no_products_selected),
            show_clear_all: items.len() > 1,
            generate_enabled: !items.is_empty(),
            items,
        }
    }

    /// Answers a chat message.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn submit_message(&mut self, input: &str) -> Option<ReplyScript> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let context = ResolveContext::new(self.selection.products(), self.language)
            .with_routine(self.active_routine.as_ref());
        let reply = resolve_with(input, &context, &mut self.rng);

        self.log
            .push(ConversationTurn::new(input, BotReply::Text(reply.clone())));

        Some(ReplyScript::new().then(self.pacing.chat_reply(), ChatMessage::advisor(reply)))
    }

    /// Builds a routine from the selection and scripts its presentation.
    pub fn generate_routine(&mut self) -> GenerateOutcome {
        let text = self.language.text();
        let routine = match compose(self.selection.products(), self.language) {
            Ok(routine) => routine,
            Err(AdvisorError::EmptySelection) => {
                info!("Routine generation rejected: empty selection");
                return GenerateOutcome::Rejected(text.generate_rejected);
            }
            Err(e) => {
                error!(error = %e, "Routine generation failed");
                return GenerateOutcome::Rejected(text.generate_rejected);
            }
        };

        info!(sections = routine.sections.len(), "Generated routine");
        self.log.push(ConversationTurn::new(
            text.generate_label,
            BotReply::Routine(routine.clone()),
        ));
        self.active_routine = Some(routine.clone());

        GenerateOutcome::Scheduled(
            ReplyScript::new()
                .then(Duration::ZERO, ChatMessage::advisor(text.generating))
                .then(self.pacing.routine(), ChatMessage::routine(routine))
                .then(self.pacing.follow_up(), ChatMessage::advisor(text.routine_ready)),
        )
    }

    /// Switches to the other language and persists the choice.
    pub fn toggle_language(&mut self) -> Persisted<ReplyScript> {
        self.language = self.language.toggled();
        info!(language = self.language.code(), "Language changed");

        let saved = self.store.save_language(self.language);
        let script = ReplyScript::new().then(
            self.pacing.language_notice(),
            ChatMessage::advisor(self.language.text().language_changed),
        );
        Persisted::new(script, saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_core::state::InMemoryKeyValueStore;

    struct StaticCatalog(Arc<Catalog>);

    impl CatalogRepository for StaticCatalog {
        fn load(&self) -> Result<Arc<Catalog>> {
            Ok(Arc::clone(&self.0))
        }
    }

    struct BrokenCatalog;

    impl CatalogRepository for BrokenCatalog {
        fn load(&self) -> Result<Arc<Catalog>> {
            Err(AdvisorError::catalog("unreadable"))
        }
    }

    fn product(id: u32, name: &str, brand: &str, category: Category) -> Product {
        Product {
            id,
            name: name.to_string(),
            brand: brand.to_string(),
            category,
            image: String::new(),
            description: format!("About {}", name),
        }
    }

    fn catalog() -> StaticCatalog {
        StaticCatalog(Arc::new(Catalog::new(vec![
            product(1, "Foaming Facial Cleanser", "CeraVe", Category::Cleanser),
            product(2, "Revitalift Day Lotion SPF 30", "L'Oréal Paris", Category::Skincare),
            product(3, "Moisturizing Cream", "CeraVe", Category::Moisturizer),
        ])))
    }

    fn session() -> AdvisorSession {
        let store = StateStore::new(Arc::new(InMemoryKeyValueStore::new()));
        AdvisorSession::restore(&catalog(), store, PacingConfig::default())
            .unwrap()
            .with_seed(7)
    }

    #[test]
    fn test_catalog_failure_is_an_error() {
        let store = StateStore::new(Arc::new(InMemoryKeyValueStore::new()));
        let result = AdvisorSession::restore(&BrokenCatalog, store, PacingConfig::default());
        assert!(matches!(result, Err(AdvisorError::Catalog(_))));
    }

    #[test]
    fn test_toggle_unknown_product_does_not_mutate() {
        let mut session = session();
        let err = session.toggle_product(99).unwrap_err();
        assert!(err.is_not_found());
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut session = session();
        let added = session.toggle_product(1).unwrap();
        assert_eq!(added.value.0, Toggle::Added);
        assert!(added.save_error.is_none());

        let entries = session.products_in(Category::Cleanser);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].selected);

        let removed = session.toggle_product(1).unwrap();
        assert_eq!(removed.value.0, Toggle::Removed);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_panel_controls_follow_selection_size() {
        let mut session = session();
        let panel = session.selection_panel();
        assert_eq!(panel.empty_label, Some("No products selected yet"));
        assert!(!panel.show_clear_all);
        assert!(!panel.generate_enabled);

        session.toggle_product(1).unwrap();
        let panel = session.selection_panel();
        assert_eq!(panel.empty_label, None);
        assert!(!panel.show_clear_all);
        assert!(panel.generate_enabled);

        session.toggle_product(3).unwrap();
        let panel = session.selection_panel();
        assert!(panel.show_clear_all);
        assert_eq!(panel.items[1].name, "Moisturizing Cream");
    }

    #[test]
    fn test_remove_requires_a_selected_product() {
        let mut session = session();
        assert!(session.remove_product(1).unwrap_err().is_not_found());

        session.toggle_product(1).unwrap();
        session.toggle_product(2).unwrap();
        let removed = session.remove_product(1).unwrap();
        assert_eq!(removed.value.id, 1);
        assert_eq!(session.selection().products()[0].id, 2);

        assert_eq!(session.clear_selection().value, 1);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_generate_with_empty_selection_is_rejected() {
        let mut session = session();
        match session.generate_routine() {
            GenerateOutcome::Rejected(message) => assert_eq!(
                message,
                "Please select at least one product before generating a routine!"
            ),
            GenerateOutcome::Scheduled(_) => panic!("expected rejection"),
        }
        assert!(session.active_routine().is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_generate_scripts_loading_routine_and_follow_up() {
        let mut session = session();
        session.toggle_product(1).unwrap();
        session.toggle_product(2).unwrap();

        let GenerateOutcome::Scheduled(script) = session.generate_routine() else {
            panic!("expected a script");
        };
        let steps = script.steps();
        assert_eq!(steps.len(), 3);
        assert!(steps[0].delay.is_zero());
        assert_eq!(steps[1].delay, PacingConfig::default().routine());
        assert_eq!(steps[2].delay, PacingConfig::default().follow_up());
        assert!(matches!(steps[1].message, ChatMessage::Routine(_)));

        let routine = session.active_routine().unwrap();
        assert_eq!(routine.sections.len(), 2);
        assert_eq!(session.history()[0].user, "Generate Routine");
    }

    #[test]
    fn test_chat_uses_active_routine() {
        let mut session = session();
        session.toggle_product(1).unwrap();
        session.generate_routine();

        let script = session.submit_message("  What's my evening routine?  ").unwrap();
        let reply: Vec<&ChatMessage> = script.messages().collect();
        match reply[0] {
            ChatMessage::Text { body, .. } => {
                assert!(body.starts_with("Here's your evening routine:\n1. Begin your evening routine"))
            }
            other => panic!("unexpected message {:?}", other),
        }
        assert_eq!(session.history().last().unwrap().user, "What's my evening routine?");
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let mut session = session();
        assert!(session.submit_message("   ").is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_language_toggle_persists_and_announces() {
        let mut session = session();
        let outcome = session.toggle_language();
        assert_eq!(session.language(), Language::Arabic);
        assert!(outcome.save_error.is_none());

        let steps = outcome.value.steps().to_vec();
        assert_eq!(steps[0].delay, PacingConfig::default().language_notice());
        assert_eq!(
            steps[0].message,
            ChatMessage::advisor(Language::Arabic.text().language_changed)
        );
        assert_eq!(session.welcome(), Language::Arabic.text().welcome);
    }
}
