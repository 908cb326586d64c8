pub mod config;
pub mod internal_linking;
pub mod seo_gatekeeper;
pub mod slug;
pub mod tool_reader;
