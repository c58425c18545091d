//! Concurrent in-memory student store.
//!
//! The store owns every [`Student`] record and is the only component allowed to
//! mutate them. Handlers receive owned clones, so nothing can change a record
//! outside the store's locking discipline. Identifiers are assigned from a
//! monotonically increasing counter that starts at 1 and is never reused, even
//! after a delete.
//!
//! Concurrency follows the classic readers/writer contract: lookups take the
//! read lock and may proceed in parallel, while every mutation takes the write
//! lock and excludes all other access for its duration. The counter and the map
//! live under the same lock so an id can never be observed without its record.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// A single student record as stored and served over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier assigned by the store on creation, immutable after.
    pub id: u64,
    /// Display name, non-empty.
    pub name: String,
    /// Age in years, strictly positive.
    pub age: u32,
    /// Contact email, non-empty (no format validation beyond presence).
    pub email: String,
}

/// Client-supplied student fields for create and update requests.
///
/// Deliberately has no `id` field: any id present in a request body is ignored
/// during deserialization, so clients can never pick or change identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewStudent {
    /// Display name, non-empty.
    pub name: String,
    /// Age in years, strictly positive.
    pub age: u32,
    /// Contact email, non-empty.
    pub email: String,
}

impl NewStudent {
    /// Check the presence rules: `name` and `email` non-empty, `age` positive.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.age > 0 && !self.email.is_empty()
    }
}

/// Map plus id counter, guarded together by one lock.
struct StoreInner {
    students: HashMap<u64, Student>,
    next_id: u64,
}

/// Thread-safe store holding all student records for the process lifetime.
///
/// Constructed once at startup (or per test fixture) and shared behind an
/// `Arc` by the HTTP layer. All operations are safe for concurrent invocation
/// and none of them fail: absence is reported as a normal outcome, not an
/// error.
pub struct StudentStore {
    inner: RwLock<StoreInner>,
}

impl StudentStore {
    /// Create an empty store with the id counter at 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                students: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Insert a new record, assigning the next unused id.
    ///
    /// Returns the assigned id. Ids from successive calls are strictly
    /// increasing with no gaps, regardless of interleaving with other writers.
    pub fn add(&self, new: NewStudent) -> u64 {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.students.insert(
            id,
            Student {
                id,
                name: new.name,
                age: new.age,
                email: new.email,
            },
        );
        inner.next_id += 1;
        id
    }

    /// Look up a record by id, returning an owned clone.
    pub fn get(&self, id: u64) -> Option<Student> {
        self.inner.read().students.get(&id).cloned()
    }

    /// Snapshot of all current records. Order is unspecified.
    pub fn get_all(&self) -> Vec<Student> {
        self.inner.read().students.values().cloned().collect()
    }

    /// Replace the name/age/email of an existing record, keeping its id.
    ///
    /// Returns `false` and leaves the store unchanged when `id` is absent.
    pub fn update(&self, id: u64, new: NewStudent) -> bool {
        let mut inner = self.inner.write();
        match inner.students.get_mut(&id) {
            Some(student) => {
                student.name = new.name;
                student.age = new.age;
                student.email = new.email;
                true
            }
            None => false,
        }
    }

    /// Remove a record by id. Returns `false` when `id` is absent.
    ///
    /// The id counter is unaffected; a deleted id is never handed out again.
    pub fn delete(&self, id: u64) -> bool {
        self.inner.write().students.remove(&id).is_some()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.inner.read().students.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new()
    }
}
