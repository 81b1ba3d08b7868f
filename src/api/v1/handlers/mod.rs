pub mod backups;
pub mod customers;
pub mod feedback;
pub mod health;
pub mod me;
pub mod settings;
