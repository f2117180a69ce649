pub mod profile;
pub mod user;
pub mod workspace;

pub use profile::Profile;
pub use user::{PublicUser, User, UserSummary};
pub use workspace::{TeamSize, Workspace, WorkspaceType};
