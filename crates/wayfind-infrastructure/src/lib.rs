pub mod device;
pub mod paths;
pub mod storage;

pub use crate::device::{ConfiguredDeviceLocator, DeniedDeviceLocator};
pub use crate::storage::config_storage::ConfigStorage;
pub use crate::storage::secret_storage::{SecretStorage, SecretStorageError};
pub use crate::storage::session_store::SessionStore;
