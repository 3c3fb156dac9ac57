//! Page components, one per route.

pub mod demo;
pub mod home;
pub mod upload;

pub use demo::DemoPage;
pub use home::HomePage;
pub use upload::UploadPage;
