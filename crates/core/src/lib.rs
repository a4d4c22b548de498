#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod quiz;
