//! Page Components

mod home;
mod login;
mod product;

pub use home::HomePage;
pub use login::LoginPage;
pub use product::ProductPage;
