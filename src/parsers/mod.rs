pub mod po;
pub mod strings;
