//! Pages
//!
//! Top-level page components: the public landing/auth pages and the
//! authenticated dashboard views.

pub mod accounts;
pub mod final_step;
pub mod landing;
pub mod performance;
pub mod reset_password;
pub mod signin;
pub mod signup;
pub mod subscription;
pub mod verify_email;

pub use accounts::Accounts;
pub use final_step::FinalStep;
pub use landing::Landing;
pub use performance::Performance;
pub use reset_password::ResetPassword;
pub use signin::SignIn;
pub use signup::SignUp;
pub use subscription::Subscription;
pub use verify_email::VerifyEmail;
