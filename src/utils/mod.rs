pub mod resource_link;

pub use resource_link::{ResourceKind, ResourceLink};
