use super::*;
use std::collections::HashSet;

// ============================================================================
// Basic append
// ============================================================================

#[test]
fn test_new_is_empty() {
    let arena: AppendArena<u32> = AppendArena::with_capacity(4);
    assert!(arena.is_empty());
    assert!(!arena.is_full());
    assert_eq!(arena.capacity(), 4);
    assert_eq!(arena.iter().count(), 0);
}

#[test]
fn test_push_returns_sequential_indices() {
    let arena = AppendArena::with_capacity(4);
    assert_eq!(arena.push(10), Ok(0));
    assert_eq!(arena.push(20), Ok(1));
    assert_eq!(arena.push(30), Ok(2));

    assert_eq!(arena.len(), 3);
    assert_eq!(arena.get(1), Some(&20));
    assert_eq!(arena.get(3), None);
    assert_eq!(arena.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
}

#[test]
fn test_push_when_full_hands_value_back() {
    let arena = AppendArena::with_capacity(2);
    arena.push("a").unwrap();
    arena.push("b").unwrap();

    assert!(arena.is_full());
    assert_eq!(arena.push("c"), Err("c"));
    assert_eq!(arena.len(), 2);
}

#[test]
fn test_zero_capacity() {
    let arena = AppendArena::with_capacity(0);
    assert!(arena.is_full());
    assert_eq!(arena.push(1), Err(1));
}

// ============================================================================
// Clear / coalesce
// ============================================================================

#[test]
fn test_clear_allows_reuse() {
    let mut arena = AppendArena::with_capacity(2);
    arena.push(1).unwrap();
    arena.push(2).unwrap();

    arena.clear();

    assert!(arena.is_empty());
    assert_eq!(arena.get(0), None);
    assert_eq!(arena.push(3), Ok(0));
    assert_eq!(arena.get(0), Some(&3));
}

#[test]
fn test_coalesce_keeps_written_prefix() {
    let mut arena = AppendArena::with_capacity(8);
    for i in 0..5 {
        arena.push(i).unwrap();
    }

    assert_eq!(arena.coalesce(), 5);
    assert_eq!(arena.len(), 5);
    assert_eq!(arena.iter().count(), 5);
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_push_yields_unique_indices() {
    let arena = AppendArena::with_capacity(256);

    let indices: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|thread| {
                let arena = &arena;
                scope.spawn(move || {
                    (0..40)
                        .filter_map(|i| arena.push(thread * 1000 + i).ok())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
    });

    // 320 attempts, 256 slots: exactly capacity succeed, all distinct
    assert_eq!(indices.len(), 256);
    let unique: HashSet<usize> = indices.iter().copied().collect();
    assert_eq!(unique.len(), 256);
    assert!(arena.is_full());
    assert_eq!(arena.iter().count(), 256);
}
