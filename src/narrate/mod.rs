pub mod client;
pub mod narrate_model;
