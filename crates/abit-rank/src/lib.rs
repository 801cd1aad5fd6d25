//! Rank projections for an applicant in a university admissions competition list.
//!
//! [`ranking`] holds the pure projector; [`admissions`] supplies competition lists,
//! [`report`] turns a projection into something a person can read, and
//! [`service::RankLookupService`] wires the three together.

pub mod admissions;
pub mod config;
pub mod error;
pub mod ranking;
pub mod report;
pub mod service;
pub mod telemetry;
