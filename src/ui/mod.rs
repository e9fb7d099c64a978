pub mod components;
pub mod pages;
pub mod sections;
pub mod shell;
pub mod theme;
