pub mod login;
pub mod not_found;
pub mod register;
pub mod verify_email;

pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use verify_email::VerifyEmailPage;
