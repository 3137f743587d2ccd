pub mod builder;
pub mod classifier;
pub mod encoder;
pub mod error;
pub mod executable_utils;
pub mod model;
pub mod predictor;
pub mod registry;
pub mod submission;
