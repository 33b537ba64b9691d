// Module exports for models

pub mod meal;
pub mod nutrient;
pub mod settings;
pub mod timer;
