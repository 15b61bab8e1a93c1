pub mod config;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
