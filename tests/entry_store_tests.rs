// Integration tests for the entry store and entry service
//
// Tests cover:
// - Create invariants over generated inputs
// - Not-found behaviour leaving the store untouched
// - Partial updates
// - Seed data and reset

use std::collections::HashSet;
use std::sync::Arc;

use fake::{Fake, Faker};
use fake::faker::internet::en::DomainSuffix;
use fake::faker::lorem::en::{Paragraph, Sentence, Word};
use knowledge_capture::error::AppError;
use knowledge_capture::models::{EntryPatch, NewEntry};
use knowledge_capture::services::{EntryService, EntryServiceImpl};
use knowledge_capture::storage::{EntryRepository, InMemoryEntryStore};
use rstest::rstest;

fn random_entry() -> NewEntry {
    let title: String = Sentence(2..6).fake();
    let description: String = Paragraph(1..3).fake();
    let entry = NewEntry::new(title, description);
    if Faker.fake::<bool>() {
        let word: String = Word().fake();
        let suffix: String = DomainSuffix().fake();
        entry.with_image_url(format!("https://{word}.{suffix}/photo.jpg"))
    } else {
        entry
    }
}

fn seeded_service() -> EntryServiceImpl {
    EntryServiceImpl::new(Arc::new(InMemoryEntryStore::seeded()))
}

#[tokio::test]
async fn test_generated_creates_have_unique_ids_and_equal_timestamps() {
    let store = InMemoryEntryStore::new();
    let mut ids = HashSet::new();

    for _ in 0..50 {
        let input = random_entry();
        let created = store.create(input.clone()).await.unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.created_at, created.updated_at);
        assert!(ids.insert(created.id.clone()), "duplicate id {}", created.id);

        let fetched = store.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, input.title);
        assert_eq!(fetched.description, input.description);
        assert_eq!(fetched.image_url, input.image_url);
    }

    assert_eq!(store.count().await.unwrap(), 50);
}

#[tokio::test]
async fn test_ids_stay_unique_across_reset() {
    let store = InMemoryEntryStore::seeded();
    let before = store.create(random_entry()).await.unwrap();
    store.reset().await.unwrap();
    let after = store.create(random_entry()).await.unwrap();

    assert_ne!(before.id, after.id);
    assert!(store.get(&before.id).await.unwrap().is_none());
}

#[rstest]
#[case("0")]
#[case("4")]
#[case("")]
#[case("not-an-id")]
#[tokio::test]
async fn test_unknown_ids_report_not_found(#[case] id: &str) {
    let service = seeded_service();
    let before = service.list().await.unwrap();

    assert!(matches!(service.get(id).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        service.update(id, EntryPatch::title("A")).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(service.delete(id).await, Err(AppError::NotFound(_))));

    assert_eq!(service.list().await.unwrap(), before);
}

#[tokio::test]
async fn test_update_preserves_unspecified_fields() {
    let service = seeded_service();
    let before = service.get("1").await.unwrap();

    let after = service.update("1", EntryPatch::title("A")).await.unwrap();

    assert_eq!(after.id, before.id);
    assert_eq!(after.title, "A");
    assert_eq!(after.description, before.description);
    assert_eq!(after.image_url, before.image_url);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
}

#[tokio::test]
async fn test_update_every_field() {
    let service = seeded_service();
    let after = service
        .update(
            "3",
            EntryPatch {
                title: Some("Quality Control Checklist v2".into()),
                description: Some("Add a roughness check".into()),
                image_url: Some(Some("/assets/qc.png".into())),
            },
        )
        .await
        .unwrap();

    assert_eq!(after.title, "Quality Control Checklist v2");
    assert_eq!(after.description, "Add a roughness check");
    assert_eq!(after.image_url.as_deref(), Some("/assets/qc.png"));
    assert!(after.created_at <= after.updated_at);
}

#[tokio::test]
async fn test_seed_scenario() {
    let service = seeded_service();
    let entries = service.list().await.unwrap();
    let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Safety Protocol Update",
            "Machine Calibration Process",
            "Quality Control Checklist",
        ]
    );
}

#[tokio::test]
async fn test_delete_scenario() {
    let service = seeded_service();
    assert_eq!(service.count().await.unwrap(), 3);

    service.delete("1").await.unwrap();

    assert!(matches!(service.get("1").await, Err(AppError::NotFound(_))));
    assert!(matches!(service.delete("1").await, Err(AppError::NotFound(_))));
    assert_eq!(service.count().await.unwrap(), 2);
}
