pub mod backups;
pub mod customers;
pub mod feedback;
pub mod me;
pub mod settings;
