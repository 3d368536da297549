//! Bus-functional environment model for a simulated V30MZ core.
//!
//! The environment answers the processor's bus transactions: it decodes each
//! cycle's bus status code, routes the access to memory or the peripheral
//! register map, and drives the ready handshake back.  A [`sim::BusMaster`]
//! stands in for the processor side.

#![warn(missing_docs)]

pub mod bus;
pub mod io;
pub mod parse;
pub mod sim;
