pub mod roadmap_cache;

pub use roadmap_cache::RoadmapCache;
