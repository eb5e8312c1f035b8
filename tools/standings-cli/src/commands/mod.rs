pub mod edit;
pub mod export;
pub mod info;
pub mod init;
pub mod show;
