//! Test helpers for the mock light client contract

pub mod helpers;
