pub mod condition_detector;
pub mod detection;
pub mod skin_condition;
