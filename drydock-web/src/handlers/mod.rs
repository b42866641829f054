//! Request handlers for the API, upload, and asset routes.

pub mod api;
pub mod serve;
pub mod upload;

pub use api::{ApiError, FileListing, api_files, delete_file};
pub use serve::serve_file;
pub use upload::upload_file;
