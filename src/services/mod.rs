pub mod attendance;
pub mod prediction;
pub mod python;
