pub mod activity;
pub mod notes;
pub mod profiles;
pub mod progress;
pub mod roadmaps;
