// Sub-modules organized by functional domain
pub mod activity;
pub mod api;
pub mod note;
pub mod profile;
pub mod progress;
pub mod roadmap;

// Re-export all models to maintain compatibility with existing code
// This ensures that existing imports like `use crate::db::models::Profile` still work

// API response structures
pub use api::*;

// Profile models
pub use profile::*;

// Roadmap document and row models
pub use roadmap::*;

// Progress models
pub use progress::*;

// Note models
pub use note::*;

// Activity models
pub use activity::*;
