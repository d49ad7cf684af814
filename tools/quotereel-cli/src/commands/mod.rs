pub mod check;
pub mod generate;
pub mod init_config;
pub mod preview;
