pub mod money;
pub mod operation;
pub mod outcome;
pub mod ports;
pub mod request;
