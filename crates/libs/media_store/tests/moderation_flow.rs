//! Lifecycle tests for the moderation queue running against the in-memory
//! item store.

#![allow(clippy::unwrap_used)]

use media_store::InMemoryItemStore;
use moderation_core::{
    BroadcastEvent, Broadcaster, ItemStore, MediaStatus, ModerationError, ModerationQueue,
};
use std::sync::Arc;

fn queue_with_store() -> (Arc<InMemoryItemStore>, ModerationQueue) {
    let store = Arc::new(InMemoryItemStore::new());
    let broadcaster = Broadcaster::default();
    let queue = ModerationQueue::new(store.clone(), broadcaster, "guest");
    (store, queue)
}

async fn submit(queue: &ModerationQueue, author: &str) -> moderation_core::MediaItem {
    queue
        .submit(
            format!("http://localhost/uploads/media/{author}.jpg"),
            Some(author.to_owned()),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn submit_returns_a_pending_item_with_an_id() {
    let (_, queue) = queue_with_store();

    let item = queue
        .submit("http://localhost/uploads/media/a.jpg".into(), None)
        .await
        .unwrap();

    assert!(!item.id.is_empty());
    assert_eq!(item.status, MediaStatus::Pending);
    // Absent author falls back to the configured placeholder.
    assert_eq!(item.author, "guest");
}

#[tokio::test]
async fn listing_orders_newest_first() {
    let (_, queue) = queue_with_store();
    let a = submit(&queue, "a").await;
    let b = submit(&queue, "b").await;
    let c = submit(&queue, "c").await;

    let ids: Vec<String> = queue
        .list(None)
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(ids, vec![c.id, b.id, a.id]);
}

#[tokio::test]
async fn moderation_moves_an_item_between_status_lists() {
    // Submit item A (author "Ana"), approve it, watch it move lists.
    let (_, queue) = queue_with_store();
    let a = queue
        .submit(
            "http://localhost/uploads/media/ana.jpg".into(),
            Some("Ana".into()),
        )
        .await
        .unwrap();

    let pending = queue.list(Some(MediaStatus::Pending)).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, a.id);

    let approved = queue.moderate(&a.id, MediaStatus::Approved).await.unwrap();
    assert_eq!(approved.status, MediaStatus::Approved);
    assert_eq!(approved.id, a.id);

    assert!(queue.list(Some(MediaStatus::Pending)).await.unwrap().is_empty());
    let approved_list = queue.list(Some(MediaStatus::Approved)).await.unwrap();
    assert_eq!(approved_list.len(), 1);
    assert_eq!(approved_list[0].status, MediaStatus::Approved);
    assert_eq!(approved_list[0].author, "Ana");
}

#[tokio::test]
async fn rejecting_works_like_approving() {
    let (store, queue) = queue_with_store();
    let a = submit(&queue, "a").await;

    let rejected = queue.moderate(&a.id, MediaStatus::Rejected).await.unwrap();
    assert_eq!(rejected.status, MediaStatus::Rejected);
    assert_eq!(
        store.get(&a.id).await.unwrap().unwrap().status,
        MediaStatus::Rejected
    );
}

#[tokio::test]
async fn pending_is_not_a_verdict_and_leaves_the_store_untouched() {
    let (store, queue) = queue_with_store();
    let a = submit(&queue, "a").await;

    let mut observer = queue.broadcaster().connect();
    let err = queue.moderate(&a.id, MediaStatus::Pending).await.unwrap_err();
    assert!(matches!(err, ModerationError::Validation(_)));

    assert_eq!(
        store.get(&a.id).await.unwrap().unwrap().status,
        MediaStatus::Pending
    );
    assert_eq!(observer.try_recv(), None);
}

#[tokio::test]
async fn moderating_an_unknown_id_fails_without_an_event() {
    let (_, queue) = queue_with_store();
    let mut observer = queue.broadcaster().connect();

    let err = queue
        .moderate("no-such-id", MediaStatus::Approved)
        .await
        .unwrap_err();
    assert!(matches!(err, ModerationError::NotFound(_)));
    assert_eq!(observer.try_recv(), None);
}

#[tokio::test]
async fn each_submit_emits_exactly_one_event_to_observers_connected_at_the_time() {
    let (_, queue) = queue_with_store();
    let mut early = queue.broadcaster().connect();

    let a = submit(&queue, "a").await;
    let mut late = queue.broadcaster().connect();

    match early.try_recv() {
        Some(BroadcastEvent::NewPending(item)) => assert_eq!(item.id, a.id),
        other => panic!("expected NewPending, got {other:?}"),
    }
    assert_eq!(early.try_recv(), None, "exactly one event per submit");
    assert_eq!(late.try_recv(), None, "no replay for late connectors");
}

#[tokio::test]
async fn approval_and_rejection_emit_their_distinct_events() {
    let (_, queue) = queue_with_store();
    let a = submit(&queue, "a").await;
    let b = submit(&queue, "b").await;

    let mut observer = queue.broadcaster().connect();
    queue.moderate(&a.id, MediaStatus::Approved).await.unwrap();
    queue.moderate(&b.id, MediaStatus::Rejected).await.unwrap();

    match observer.try_recv() {
        Some(BroadcastEvent::Approved(item)) => {
            assert_eq!(item.id, a.id);
            assert_eq!(item.status, MediaStatus::Approved);
        }
        other => panic!("expected Approved, got {other:?}"),
    }
    assert_eq!(observer.try_recv(), Some(BroadcastEvent::Rejected(b.id)));
}

#[tokio::test]
async fn concurrent_moderations_of_one_id_race_last_write_wins() {
    let (store, queue) = queue_with_store();
    let a = submit(&queue, "a").await;
    let mut observer = queue.broadcaster().connect();

    let (approve, reject) = tokio::join!(
        queue.moderate(&a.id, MediaStatus::Approved),
        queue.moderate(&a.id, MediaStatus::Rejected),
    );
    approve.unwrap();
    reject.unwrap();

    // Exactly one terminal status persists; which one depends on write order.
    let persisted = store.get(&a.id).await.unwrap().unwrap().status;
    assert!(persisted.is_verdict());

    // Both events were still emitted, documenting the accepted inconsistency
    // between the loser's event and the stored record.
    let first = observer.try_recv().expect("two events expected");
    let second = observer.try_recv().expect("two events expected");
    assert_eq!(observer.try_recv(), None);
    let mut kinds: Vec<bool> = [first, second]
        .iter()
        .map(|e| matches!(e, BroadcastEvent::Approved(_)))
        .collect();
    kinds.sort_unstable();
    assert_eq!(kinds, vec![false, true], "one Approved and one Rejected");
}
