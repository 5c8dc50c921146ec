//! In-memory person repository.
//!
//! Used when no database is configured and by the API tests. Records are kept
//! in id order, which is also the order `find_all` returns them in.

use std::collections::BTreeMap;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::person::Person;
use crate::repositories::person_repository::PersonRepository;
use crate::types::PersonId;

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<PersonId, Person>,
    last_id: i64,
}

#[derive(Debug, Default)]
pub struct InMemoryPersonRepository {
    store: RwLock<Store>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository pre-populated with `people`; each is saved in turn.
    pub async fn with_people(
        people: impl IntoIterator<Item = Person>,
    ) -> Result<Self, AppError> {
        let repo = Self::new();
        for person in people {
            repo.insert(person).await?;
        }
        Ok(repo)
    }

    async fn insert(&self, mut person: Person) -> Result<Person, AppError> {
        let mut store = self.store.write().await;
        let id = match person.id {
            Some(id) => {
                store.last_id = store.last_id.max(id.get());
                id
            }
            None => {
                store.last_id = store
                    .last_id
                    .checked_add(1)
                    .ok_or_else(|| anyhow!("person id space exhausted"))?;
                PersonId::new(store.last_id)
            }
        };
        person.id = Some(id);
        store.rows.insert(id, person.clone());
        Ok(person)
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, AppError> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, AppError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn find_first_by_name(&self, name: &str) -> Result<Option<Person>, AppError> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .values()
            .find(|p| p.name.as_deref() == Some(name))
            .cloned())
    }

    async fn save(&self, person: Person) -> Result<Person, AppError> {
        self.insert(person).await
    }

    async fn delete(&self, person: &Person) -> Result<(), AppError> {
        if let Some(id) = person.id {
            self.store.write().await.rows.remove(&id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_assigns_increasing_ids() {
        let repo = InMemoryPersonRepository::new();
        let first = repo.save(Person::unsaved("Name")).await.unwrap();
        let second = repo.save(Person::unsaved("Sabo")).await.unwrap();
        assert_eq!(first.id, Some(PersonId::new(1)));
        assert_eq!(second.id, Some(PersonId::new(2)));
    }

    #[tokio::test]
    async fn save_with_explicit_id_upserts_and_advances_counter() {
        let repo = InMemoryPersonRepository::new();
        repo.save(Person::new(10, "Ten")).await.unwrap();
        repo.save(Person::new(10, "Still ten")).await.unwrap();
        let next = repo.save(Person::unsaved("Next")).await.unwrap();

        assert_eq!(next.id, Some(PersonId::new(11)));
        let stored = repo.find_by_id(PersonId::new(10)).await.unwrap();
        assert_eq!(stored, Some(Person::new(10, "Still ten")));
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn save_after_max_explicit_id_fails_without_overflow() {
        let repo = InMemoryPersonRepository::new();
        let max = repo.save(Person::new(i64::MAX, "Max")).await.unwrap();
        assert_eq!(max.id, Some(PersonId::new(i64::MAX)));

        let err = repo
            .save(Person::unsaved("Next"))
            .await
            .expect_err("id space exhausted");
        assert!(matches!(err, AppError::InternalServerError(_)));
        assert_eq!(repo.find_all().await.unwrap(), vec![max]);
    }

    #[tokio::test]
    async fn find_first_by_name_returns_lowest_id_match() {
        let repo = InMemoryPersonRepository::with_people([
            Person::new(3, "Twin"),
            Person::new(1, "Other"),
            Person::new(2, "Twin"),
        ])
        .await
        .unwrap();

        let found = repo.find_first_by_name("Twin").await.unwrap();
        assert_eq!(found, Some(Person::new(2, "Twin")));
        assert!(repo.find_first_by_name("twin").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let repo = InMemoryPersonRepository::with_people([Person::new(1, "Name")])
            .await
            .unwrap();
        repo.delete(&Person::new(1, "Name")).await.unwrap();
        assert!(repo.find_by_id(PersonId::new(1)).await.unwrap().is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
