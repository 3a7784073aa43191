// ABOUTME: Persistence layer for roster — the person store facade over SQLite.
// ABOUTME: Provides the session-factory handle, the facade operations, and the error taxonomy.

pub mod error;
pub mod handle;
pub mod person;

pub use error::StoreError;
pub use handle::StoreHandle;
pub use person::PersonStore;
