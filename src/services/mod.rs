pub mod assessments;
pub mod assignments;
pub mod feedback;
pub mod students;
pub mod tutor;

pub use assessments::AssessmentService;
pub use assignments::AssignmentService;
pub use feedback::FeedbackService;
pub use students::StudentService;
pub use tutor::TutorService;
