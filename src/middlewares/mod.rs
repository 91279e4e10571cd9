pub mod cors;
pub mod require_bearer;

pub use cors::build_cors;
pub use require_bearer::RequireBearer;
