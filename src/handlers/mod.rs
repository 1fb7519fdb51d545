pub mod admin;
pub mod pages;
pub mod superadmin;
