//! Request bodies and path building blocks.
//!
//! Each type serializes to exactly the JSON body one API operation expects.

mod account;
mod recipient;
mod user;

pub use account::{AccountSettings, CredentialSet, OptionMap, OutgoingMethod};
pub use recipient::{EmailContent, RecipientGroup, SendEmail, SendTestEmail, TargetAttributes};
pub use user::UserRecord;
