pub mod cli;
pub mod download;
