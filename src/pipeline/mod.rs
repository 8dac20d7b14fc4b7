// file: src/pipeline/mod.rs
// description: demo pipeline exports
// reference: pipeline orchestration

pub mod demo;

pub use demo::{DemoPlan, DemoProfile, DemoReport, DemoStep, run_demo};
