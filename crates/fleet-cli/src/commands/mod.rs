//! CLI Commands

pub mod demo;
pub mod run;

pub use demo::DemoCommand;
pub use run::RunCommand;
