use async_trait::async_trait;

use super::batch_errors::FileStoreError;

/// Trait defining the contract for the filesystem side of batch mutations.
/// Both operations are expected to be recoverable at a lower layer (copy, not
/// move; trash, not unlink).
#[async_trait]
pub trait AddonFileStoreTrait: Send + Sync {
    /// Copy a workshop package into the managed addons folder. Returns the
    /// destination filename.
    async fn migrate(&self, workshop_id: i64) -> std::result::Result<String, FileStoreError>;

    /// Move a managed addon file to the trash.
    async fn trash(&self, filename: &str) -> std::result::Result<(), FileStoreError>;
}
