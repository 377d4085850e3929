pub mod context;
pub mod credentials;
pub mod guard;
pub mod storage;
