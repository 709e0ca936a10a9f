pub mod use_email_verification;
pub mod use_push_route;
pub mod use_title;

pub use use_email_verification::use_email_verification;
pub use use_push_route::use_push_route;
pub use use_title::use_title;
