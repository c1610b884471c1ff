//! Outranker - Product Ranking Decision Support Backend
//!
//! This crate implements the PROMETHEE II outranking method for ranking
//! products against weighted sub-criteria.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
