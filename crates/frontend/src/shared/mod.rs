pub mod export;
pub mod page_config;
pub mod storage;
