//! Footium integration for the club dashboard
//!
//! This crate provides a client for the Footium GraphQL API (club
//! ownership, per-club statistics, tournament standings) and a client for
//! the live match score SSE feed.

pub mod client;
pub mod live;
pub mod queries;
pub mod types;

pub use client::{FootballApi, FootiumClient};
pub use live::{LiveFeedConfig, LiveScoreFeed, LiveUpdate};
