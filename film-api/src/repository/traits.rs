//! Repository trait definition
//!
//! Uses RPITIT (Return Position Impl Trait In Traits) so implementations can
//! be written as plain `async fn`s while the returned futures stay `Send` for
//! axum handlers.

use std::future::Future;

use super::error::RepositoryError;

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Data store gateway for one entity type
///
/// # Type Parameters
///
/// - `Id`: identifier type (e.g., `FilmId`)
/// - `Entity`: the row type returned from queries
/// - `Create`: validated data for inserting a new entity
/// - `Update`: partial data for updating an entity; absent fields are kept
///
/// Every method maps to exactly one SQL statement, so each call either fully
/// applies or fails.
pub trait Repository<Id, Entity, Create, Update>: Send + Sync {
    /// Find an entity by its identifier
    ///
    /// Returns `Ok(None)` if no row matches.
    fn find_by_id(&self, id: &Id) -> impl Future<Output = RepositoryResult<Option<Entity>>> + Send;

    /// List entities in ascending identifier order
    ///
    /// `limit` caps the number of rows returned; `None` returns every row.
    fn find_all(
        &self,
        limit: Option<i64>,
    ) -> impl Future<Output = RepositoryResult<Vec<Entity>>> + Send;

    /// Insert a new entity and return it with its generated identifier
    fn create(&self, data: Create) -> impl Future<Output = RepositoryResult<Entity>> + Send;

    /// Merge `data` onto the stored entity and return the result
    ///
    /// Returns `Ok(None)` if no row matches. The merge happens inside the
    /// store, so a concurrent delete cannot interleave between read and write.
    fn update(
        &self,
        id: &Id,
        data: Update,
    ) -> impl Future<Output = RepositoryResult<Option<Entity>>> + Send;

    /// Permanently delete an entity and return its pre-deletion data
    ///
    /// Returns `Ok(None)` if no row matches.
    fn delete(&self, id: &Id) -> impl Future<Output = RepositoryResult<Option<Entity>>> + Send;

    /// Round-trip to the store, used by the readiness check
    fn ping(&self) -> impl Future<Output = RepositoryResult<()>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{RepositoryErrorKind, RepositoryOperation};

    struct MockId(u32);
    struct MockEntity {
        id: u32,
    }

    struct MockRepository;

    impl Repository<MockId, MockEntity, (), ()> for MockRepository {
        async fn find_by_id(&self, id: &MockId) -> RepositoryResult<Option<MockEntity>> {
            Ok(Some(MockEntity { id: id.0 }))
        }

        async fn find_all(&self, limit: Option<i64>) -> RepositoryResult<Vec<MockEntity>> {
            let all = (1..=5).map(|id| MockEntity { id });
            Ok(match limit {
                Some(n) => all.take(n as usize).collect(),
                None => all.collect(),
            })
        }

        async fn create(&self, _data: ()) -> RepositoryResult<MockEntity> {
            Ok(MockEntity { id: 6 })
        }

        async fn update(&self, id: &MockId, _data: ()) -> RepositoryResult<Option<MockEntity>> {
            Ok(Some(MockEntity { id: id.0 }))
        }

        async fn delete(&self, _id: &MockId) -> RepositoryResult<Option<MockEntity>> {
            Ok(None)
        }

        async fn ping(&self) -> RepositoryResult<()> {
            Err(RepositoryError::connection_failed(
                RepositoryOperation::Ping,
                "offline",
            ))
        }
    }

    #[tokio::test]
    async fn test_mock_repository_find_all_limit() {
        let repo = MockRepository;
        assert_eq!(repo.find_all(None).await.unwrap().len(), 5);
        assert_eq!(repo.find_all(Some(2)).await.unwrap().len(), 2);
        assert!(repo.find_all(Some(0)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_repository_find_by_id() {
        let repo = MockRepository;
        let entity = repo.find_by_id(&MockId(3)).await.unwrap().unwrap();
        assert_eq!(entity.id, 3);
    }

    #[tokio::test]
    async fn test_mock_repository_delete_missing() {
        let repo = MockRepository;
        assert!(repo.delete(&MockId(9)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mock_repository_ping_failure() {
        let repo = MockRepository;
        let error = repo.ping().await.unwrap_err();
        assert_eq!(error.operation, RepositoryOperation::Ping);
        assert_eq!(error.kind, RepositoryErrorKind::ConnectionFailed);
    }
}
