pub mod errors;
pub mod db;
pub mod timestamps;
pub mod blog;
pub mod tag;
pub mod blog_tag;
