pub mod current_user;
pub mod login_user;
pub mod register_user;

pub use current_user::current_user;
pub use login_user::login_user;
pub use register_user::register_user;
