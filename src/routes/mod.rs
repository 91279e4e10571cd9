pub mod assessments;
pub mod assignments;
pub mod feedback;
pub mod health;
pub mod students;
pub mod tutor;

pub use assessments::configure_assessment_routes;
pub use assignments::configure_assignment_routes;
pub use feedback::configure_feedback_routes;
pub use health::configure_health_routes;
pub use students::configure_student_routes;
pub use tutor::configure_tutor_routes;

/// 同时挂载在根路径与 `/functions/v1` 下，兼容前端原有的函数地址
pub(crate) const ROUTE_PREFIXES: [&str; 2] = ["", "/functions/v1"];
