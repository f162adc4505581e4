use std::sync::Arc;

use advisor_application::{AdvisorSession, GenerateOutcome, ReplyPacer};
use advisor_core::config::PacingConfig;
use advisor_core::conversation::ChatMessage;
use advisor_core::language::Language;
use advisor_core::state::{KeyValueStore, LANGUAGE_KEY, StateStore};
use advisor_infrastructure::{AdvisorPaths, FileCatalogRepository, TomlKeyValueStore};
use tempfile::TempDir;
use tokio::sync::mpsc;

fn open_session(paths: &AdvisorPaths) -> AdvisorSession {
    let kv = TomlKeyValueStore::new(paths.storage_file().unwrap());
    AdvisorSession::restore(
        &FileCatalogRepository::bundled(),
        StateStore::new(Arc::new(kv)),
        PacingConfig::immediate(),
    )
    .unwrap()
    .with_seed(1)
}

#[test]
fn test_selection_and_language_survive_restart() {
    let temp_dir = TempDir::new().unwrap();
    let paths = AdvisorPaths::new(Some(temp_dir.path().to_path_buf()));

    let mut session = open_session(&paths);
    for id in [5, 1, 22] {
        let outcome = session.toggle_product(id).unwrap();
        assert!(outcome.save_error.is_none());
    }
    session.toggle_language();
    let panel_before = session.selection_panel();
    drop(session);

    let restored = open_session(&paths);
    let ids: Vec<u32> = restored.selection().products().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![5, 1, 22]);
    assert_eq!(restored.language(), Language::Arabic);
    assert_eq!(restored.selection_panel(), panel_before);
    assert!(restored.selection_panel().generate_enabled);
}

#[test]
fn test_cleared_selection_restores_empty() {
    let temp_dir = TempDir::new().unwrap();
    let paths = AdvisorPaths::new(Some(temp_dir.path().to_path_buf()));

    let mut session = open_session(&paths);
    session.toggle_product(1).unwrap();
    session.toggle_product(2).unwrap();
    session.clear_selection();
    drop(session);

    let restored = open_session(&paths);
    assert!(restored.selection().is_empty());
    assert!(!restored.selection_panel().generate_enabled);
}

#[test]
fn test_unknown_stored_language_falls_back_to_english() {
    let temp_dir = TempDir::new().unwrap();
    let paths = AdvisorPaths::new(Some(temp_dir.path().to_path_buf()));

    TomlKeyValueStore::new(paths.storage_file().unwrap())
        .set(LANGUAGE_KEY, "klingon")
        .unwrap();

    assert_eq!(open_session(&paths).language(), Language::English);
}

#[test]
fn test_corrupt_storage_is_replaced_on_next_save() {
    let temp_dir = TempDir::new().unwrap();
    let paths = AdvisorPaths::new(Some(temp_dir.path().to_path_buf()));
    let storage = paths.storage_file().unwrap();
    std::fs::create_dir_all(storage.parent().unwrap()).unwrap();
    std::fs::write(&storage, "selectedProducts = [[[ garbage").unwrap();

    let mut session = open_session(&paths);
    assert!(session.selection().is_empty());
    assert_eq!(session.language(), Language::English);

    let outcome = session.toggle_product(1).unwrap();
    assert!(outcome.save_error.is_none());
    assert!(session.toggle_language().save_error.is_none());
    drop(session);

    let restored = open_session(&paths);
    let ids: Vec<u32> = restored.selection().products().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1]);
    assert_eq!(restored.language(), Language::Arabic);
}

#[tokio::test]
async fn test_generated_routine_is_delivered_through_pacer() {
    let temp_dir = TempDir::new().unwrap();
    let paths = AdvisorPaths::new(Some(temp_dir.path().to_path_buf()));
    let mut session = open_session(&paths);
    session.toggle_product(1).unwrap();
    session.toggle_product(10).unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut pacer = ReplyPacer::new(tx);

    let GenerateOutcome::Scheduled(script) = session.generate_routine() else {
        panic!("expected a routine script");
    };
    pacer.schedule(script).await;
    pacer.flush().await;

    let mut delivered = Vec::new();
    while let Ok(message) = rx.try_recv() {
        delivered.push(message);
    }
    assert_eq!(delivered.len(), 3);
    assert_eq!(
        delivered[0],
        ChatMessage::advisor("Creating your personalized routine... ✨")
    );
    match &delivered[1] {
        ChatMessage::Routine(routine) => {
            assert_eq!(routine.title, "Your Personalized Beauty Routine");
            assert_eq!(routine.sections.len(), 2);
        }
        other => panic!("expected a routine, got {:?}", other),
    }
}
