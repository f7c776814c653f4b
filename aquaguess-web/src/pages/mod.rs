pub mod boot;
pub mod play;
