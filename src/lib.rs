//! Text command dispatch for Discord bots.
//!
//! Register [`Command`](command::Command)s with an
//! [`Executor`](executor::Executor), then hand it every incoming message.
//! Matching commands run concurrently and failures are reported back to the
//! originating channel.

pub mod command;
pub mod commands;
pub mod config;
pub mod context;
pub mod executor;
pub mod message;
pub mod reply;
pub mod session;
pub mod text;

#[cfg(test)]
pub(crate) mod testing;
