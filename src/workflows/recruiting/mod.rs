//! Careers portal recruiting workflow: job catalog, candidate assessment,
//! durable recording, and HR reporting.

pub mod applications;
pub mod auth;
pub mod catalog;
pub mod report;
