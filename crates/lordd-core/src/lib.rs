pub mod config;
pub mod logging;

pub mod archive;
pub mod cards;
pub mod fetch;
pub mod pipeline;
pub mod url_model;
