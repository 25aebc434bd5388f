mod mapping;
mod requests;
mod types;

pub use mapping::{ProjectRow, INITIAL_VERSION, PROJECT_PARTITION_KEY};
pub use requests::{CreateProjectRequest, UpdateProjectRequest};
pub use types::{new_project_id, Project};
