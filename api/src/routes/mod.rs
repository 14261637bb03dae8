//! Route handlers

pub mod contact;
