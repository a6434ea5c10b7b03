pub mod layout;
pub mod notes;
