use excursion_core::{ExcursionFields, ExcursionRepository, InMemoryExcursionRepository};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const CREATES_PER_THREAD: usize = 50;

fn fields(worker: usize) -> ExcursionFields {
    ExcursionFields {
        name: format!("Worker {worker} excursion"),
        description: String::new(),
        location: "Anywhere".to_string(),
        price: 1.0,
        duration: 1,
        max_participants: 1,
    }
}

#[test]
fn concurrent_creates_allocate_unique_identities() {
    let repo = Arc::new(InMemoryExcursionRepository::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|worker| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                (0..CREATES_PER_THREAD)
                    .map(|_| repo.create(fields(worker)).unwrap().id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "identity {id} allocated twice");
        }
    }

    let total = THREADS * CREATES_PER_THREAD;
    assert_eq!(ids.len(), total);
    assert_eq!(repo.len(), total);
    assert_eq!(ids.iter().max().copied(), Some(total as u64));
}

#[test]
fn concurrent_deletes_remove_each_record_exactly_once() {
    let repo = Arc::new(InMemoryExcursionRepository::new());
    let ids: Vec<_> = (0..100).map(|_| repo.create(fields(0)).unwrap().id).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let repo = Arc::clone(&repo);
            let ids = ids.clone();
            thread::spawn(move || ids.iter().filter(|id| repo.delete(**id).is_ok()).count())
        })
        .collect();

    let removed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(removed, ids.len());
    assert!(repo.list().unwrap().is_empty());
}
