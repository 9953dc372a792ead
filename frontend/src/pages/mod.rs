pub mod alerts;
pub mod assistant;
pub mod budget;
pub mod community;
pub mod dashboard;
pub mod education;
pub mod goals;
pub mod settings;
pub mod trends;
