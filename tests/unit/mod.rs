pub mod activity;
pub mod generation;
pub mod profile;
pub mod progress;
pub mod quiz;
pub mod resource_link;
pub mod roadmap;
