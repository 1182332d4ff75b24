//! Unit tests for the in-memory message repository.

use std::collections::HashSet;

use crate::message::{
    adapters::memory::InMemoryMessageRepository,
    domain::{MessageId, NewMessage},
    ports::MessageRepository,
};
use crate::test_support::FixedClock;
use rstest::{fixture, rstest};

#[fixture]
fn repo() -> InMemoryMessageRepository {
    InMemoryMessageRepository::new()
}

fn draft(content: &str) -> NewMessage {
    NewMessage::new(content, "tester", &FixedClock::new()).expect("valid draft")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_all_is_empty_for_fresh_repository(repo: InMemoryMessageRepository) {
    let messages = repo.list_all().await.expect("list should succeed");
    assert!(messages.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_sequential_ids_from_one(repo: InMemoryMessageRepository) {
    let first = repo.create(draft("one")).await.expect("create");
    let second = repo.create(draft("two")).await.expect("create");

    assert_eq!(first.id(), MessageId::new(1));
    assert_eq!(second.id(), MessageId::new(2));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_all_returns_messages_in_creation_order(repo: InMemoryMessageRepository) {
    let mut created = Vec::new();
    for content in ["a", "b", "c"] {
        created.push(repo.create(draft(content)).await.expect("create"));
    }

    let listed = repo.list_all().await.expect("list should succeed");
    assert_eq!(listed, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_all_returns_a_detached_snapshot(repo: InMemoryMessageRepository) {
    repo.create(draft("before")).await.expect("create");
    let snapshot = repo.list_all().await.expect("list should succeed");

    repo.create(draft("after")).await.expect("create");

    assert_eq!(snapshot.len(), 1);
    assert_eq!(repo.list_all().await.expect("list").len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clones_share_the_same_store(repo: InMemoryMessageRepository) {
    let other = repo.clone();
    other.create(draft("shared")).await.expect("create");

    assert_eq!(repo.list_all().await.expect("list").len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_never_share_an_id(repo: InMemoryMessageRepository) {
    let handles: Vec<_> = (0..64)
        .map(|n| {
            let store = repo.clone();
            tokio::spawn(async move { store.create(draft(&format!("msg {n}"))).await })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let message = handle.await.expect("join").expect("create");
        assert!(ids.insert(message.id()), "duplicate id {}", message.id());
    }

    let listed = repo.list_all().await.expect("list");
    assert_eq!(listed.len(), 64);
    assert!(listed.windows(2).all(|pair| match pair {
        [earlier, later] => earlier.id() < later.id(),
        _ => false,
    }));
}
