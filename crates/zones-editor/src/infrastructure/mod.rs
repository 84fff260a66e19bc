//! Infrastructure layer for the zone layout editor.
//!
//! Contains the file-system adapters (record store, TOML configuration) and
//! the shared editor state that ties the application use cases to storage.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `zones_core`, but MUST NOT be imported by the `application` layer.

pub mod state;
pub mod storage;
