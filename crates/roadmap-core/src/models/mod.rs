pub mod level;
pub mod request;
pub mod roadmap;
