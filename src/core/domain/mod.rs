pub mod birth_date;
pub mod entity;
pub mod repository;
