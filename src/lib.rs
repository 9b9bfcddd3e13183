//! Sommelier Widget - Conversation Engine for Guided Wine Selection
//!
//! This crate implements the conversation orchestration behind an
//! embeddable wine-selection chat widget: a fixed phase script, a
//! transcript, and a completion client port for the text generation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
