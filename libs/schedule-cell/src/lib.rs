pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::ScheduleError;
pub use models::{
    DaySchedule, DayScheduleView, ScheduleRange, WeeklySchedule, WeeklyScheduleView,
};
pub use router::schedule_routes;
pub use services::editor::ScheduleEditor;
pub use services::schedule::{SaveGuard, ScheduleService};
pub use services::slots::{compress, decompress};
