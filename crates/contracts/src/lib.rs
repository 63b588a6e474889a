pub mod masterdata;
pub mod system;
