//! Metro place explorer server.
//!
//! A web application that answers: "I'm getting off at this station,
//! what is worth visiting nearby?" Interchange stations count as one
//! place, so picking either side of a transfer shows the same list.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod links;
pub mod selector;
pub mod transfer;
pub mod transform;
pub mod web;
