pub mod paths;
pub mod version;
