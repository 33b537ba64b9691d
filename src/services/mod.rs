// Service module exports

pub mod countdown;
pub mod notification;
pub mod nutrient;
pub mod session;
pub mod settings;
