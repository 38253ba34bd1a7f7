pub mod doctor;
pub mod repository;
