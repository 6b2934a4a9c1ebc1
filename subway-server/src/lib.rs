//! Subway network server.
//!
//! Keeps every line of a subway network as a chain of sections and answers
//! "what is the shortest way from this station to that one?" across all
//! lines.

pub mod config;
pub mod domain;
pub mod network;
pub mod path;
pub mod web;
