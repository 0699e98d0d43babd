pub mod activity_service;
pub mod context;
pub mod notes_service;
pub mod profiles_service;
pub mod progress_service;
pub mod quiz_service;
pub mod roadmaps_service;

pub use activity_service::ActivityService;
pub use notes_service::NotesService;
pub use profiles_service::ProfilesService;
pub use progress_service::ProgressService;
pub use quiz_service::QuizService;
pub use roadmaps_service::RoadmapsService;
