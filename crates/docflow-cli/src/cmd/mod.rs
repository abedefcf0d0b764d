pub mod analyze;
pub mod graph;
pub mod stage;
pub mod structure;
pub mod ui;
pub mod usecases;
pub mod workflow;
