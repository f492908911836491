pub mod data;
pub mod date_utils;
pub mod format;
pub mod forms;
pub mod prediction_api;
