//! Engines turn a query and a list of candidates into a ranking.

pub mod fuzzy;
