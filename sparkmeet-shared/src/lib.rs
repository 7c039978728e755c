#![cfg_attr(not(test), forbid(unsafe_code))]

//! Shared data models for the SparkMeet client.
//!
//! Everything the REST API sends or receives lives here, so the Yew
//! application and its tests agree on one set of wire shapes.

pub mod models;
