pub mod note;
pub mod tenant;
pub mod user;

pub use note::{NewNote, Note, NotePatch};
pub use tenant::Tenant;
pub use user::{PublicUser, Role, Subscription, User, UserPatch};
