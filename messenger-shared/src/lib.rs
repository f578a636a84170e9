#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]

//! Wire models shared between the Messenger web client and its API.

pub mod models;
