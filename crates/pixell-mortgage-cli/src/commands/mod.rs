pub mod payment;
pub mod process;
