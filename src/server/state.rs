//! Application state shared across all request handlers.
//!
//! The state is built once during startup, after the database is connected and
//! migrated, and cloned into each handler through Axum's state extraction.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::{image::ImageStore, notification::Notifier};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the connection is a pool handle, the notifier is
/// reference-counted and the image store only holds a path.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool with migrations already applied.
    pub db: DatabaseConnection,

    /// Delivery channel for new-booking notifications.
    pub notifier: Arc<dyn Notifier>,

    /// Storage for uploaded banner images.
    pub images: ImageStore,
}

impl AppState {
    pub fn new(db: DatabaseConnection, notifier: Arc<dyn Notifier>, images: ImageStore) -> Self {
        Self {
            db,
            notifier,
            images,
        }
    }
}
