//! Per-user single-flight.
//!
//! Two submissions from the same user would otherwise race on that user's
//! role set with last-write-wins results. Attempts for one user run one at a
//! time; attempts for different users never wait on each other.

use crate::MemberId;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockTable = Mutex<HashMap<MemberId, Slot>>;

#[derive(Debug, Default)]
struct Slot {
    lock: Arc<AsyncMutex<()>>,
    /// Attempts holding or waiting for `lock`.
    users: usize,
}

/// Registry of per-user locks. Entries exist only while an attempt holds or
/// waits for them.
#[derive(Debug, Clone, Default)]
pub struct UserLocks {
    table: Arc<LockTable>,
}

impl UserLocks {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until no other attempt for `member` is running.
    ///
    /// Dropping the returned future before it completes deregisters the
    /// waiter.
    pub async fn acquire(&self, member: MemberId) -> UserLockGuard {
        let (registration, lock) = {
            let mut table = self.table.lock();
            let slot = table.entry(member).or_default();
            slot.users += 1;
            let registration = Registration {
                member,
                table: Arc::clone(&self.table),
            };
            (registration, Arc::clone(&slot.lock))
        };
        let guard = lock.lock_owned().await;
        UserLockGuard {
            _guard: guard,
            _registration: registration,
        }
    }

    /// Number of users with an attempt running or queued.
    pub fn active(&self) -> usize {
        self.table.lock().len()
    }
}

/// Held for the duration of one attempt.
///
/// Fields drop in order: the lock is released before the registration.
#[derive(Debug)]
pub struct UserLockGuard {
    _guard: OwnedMutexGuard<()>,
    _registration: Registration,
}

/// Counts one attempt against its table entry until dropped.
#[derive(Debug)]
struct Registration {
    member: MemberId,
    table: Arc<LockTable>,
}

impl Drop for Registration {
    fn drop(&mut self) {
        let mut table = self.table.lock();
        if let Some(slot) = table.get_mut(&self.member) {
            slot.users -= 1;
            if slot.users == 0 {
                table.remove(&self.member);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_entry_removed_after_release() {
        let locks = UserLocks::new();
        {
            let _guard = locks.acquire(MemberId(1)).await;
            assert_eq!(locks.active(), 1);
        }
        assert_eq!(locks.active(), 0);
    }

    #[tokio::test]
    async fn test_same_user_is_serialized() {
        let locks = UserLocks::new();
        let first = locks.acquire(MemberId(1)).await;

        let waiter = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire(MemberId(1)).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        drop(first);
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should finish once the lock is released")
            .unwrap();
        assert_eq!(locks.active(), 0);
    }

    #[tokio::test]
    async fn test_different_users_do_not_block() {
        let locks = UserLocks::new();
        let _a = locks.acquire(MemberId(1)).await;
        let b = tokio::time::timeout(Duration::from_millis(100), locks.acquire(MemberId(2))).await;
        assert!(b.is_ok());
        assert_eq!(locks.active(), 2);
    }

    #[tokio::test]
    async fn test_cancelled_waiter_leaves_no_entry() {
        let locks = UserLocks::new();
        let first = locks.acquire(MemberId(1)).await;

        let timed_out =
            tokio::time::timeout(Duration::from_millis(10), locks.acquire(MemberId(1))).await;
        assert!(timed_out.is_err());
        assert_eq!(locks.active(), 1);

        drop(first);
        assert_eq!(locks.active(), 0);
    }

    #[tokio::test]
    async fn test_entry_kept_while_waiter_queued() {
        let locks = UserLocks::new();
        let first = locks.acquire(MemberId(1)).await;

        let waiter = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire(MemberId(1)).await;
                tokio::time::sleep(Duration::from_millis(20)).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        drop(first);
        assert_eq!(locks.active(), 1);

        waiter.await.unwrap();
        assert_eq!(locks.active(), 0);
    }
}
