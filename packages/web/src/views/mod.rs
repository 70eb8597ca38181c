mod login;
pub use login::Login;

mod search;
pub use search::Search;

mod not_found;
pub use not_found::NotFound;
