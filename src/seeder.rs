//! Startup-time generation of randomized sample data.
//!
//! Invoked only when the `--seed` flag is set, in lieu of serving HTTP
//! traffic. Each generated record passes the same presence validation a real
//! client input would, so seeded data is indistinguishable from API-created
//! data as far as the store is concerned.

use crate::store::{NewStudent, StudentStore};
use rand::Rng;

const FIRST_NAMES: [&str; 10] = [
    "John", "Jane", "Michael", "Emily", "David", "Sarah", "Robert", "Emma", "William", "Olivia",
];

const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Brown", "Taylor", "Miller", "Anderson", "Wilson", "Moore", "Jackson",
    "Martin",
];

/// Insert `count` randomly generated students into the store.
pub fn seed(store: &StudentStore, count: usize) {
    let mut rng = rand::rng();
    for _ in 0..count {
        let student = generate_random_student(&mut rng);
        let name = student.name.clone();
        let id = store.add(student);
        tracing::info!(id, name, "Added student");
    }
    tracing::info!(count, "Seeding completed successfully");
}

/// Build one synthetic student from the fixed name lists.
///
/// Name combines a random first and last name; age is uniform in 18..=27;
/// email is derived from the name parts.
fn generate_random_student<R: Rng>(rng: &mut R) -> NewStudent {
    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
    NewStudent {
        name: format!("{first} {last}"),
        age: rng.random_range(18..=27),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_students_pass_validation() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let student = generate_random_student(&mut rng);
            assert!(student.is_valid(), "invalid record: {student:?}");
            assert!((18..=27).contains(&student.age));
            assert!(student.email.ends_with("@example.com"));
        }
    }

    #[test]
    fn seed_inserts_requested_count() {
        let store = StudentStore::new();
        seed(&store, 10);
        assert_eq!(store.len(), 10);

        let students = store.get_all();
        assert!(students.iter().all(|s| s.id >= 1 && s.id <= 10));
    }
}
