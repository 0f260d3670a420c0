pub mod categorical;
pub mod indicators;
pub mod response;
pub mod validation;
