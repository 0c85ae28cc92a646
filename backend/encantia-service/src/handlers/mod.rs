/// HTTP request handlers, one module per page/route group
pub mod auth;
pub mod books;
pub mod events;
pub mod games;
pub mod home;
pub mod inbox;
pub mod notes;
pub mod profiles;
pub mod projects;
pub mod warnings;

pub use home::signed_out_view;
