mod panel;
mod user;

pub use panel::Panel;
pub use user::{
    format_joined_date, today_joined_date, Role, Status, UserId, UserRecord, DEFAULT_PHOTO,
};
