//! UI Components
//!
//! Reusable Leptos components shared across landing and dashboard pages.

pub mod account_card;
pub mod balance;
pub mod chat;
pub mod form;
pub mod loading;
pub mod nav;
pub mod toast;

pub use account_card::AccountCard;
pub use balance::BalanceText;
pub use chat::ChatWidget;
pub use form::{focus_field, FieldError, FormError};
pub use loading::{CardSkeleton, ListSkeleton};
pub use nav::Nav;
pub use toast::Toast;
