//! Inputs produce data for an exchange to consume. The exchange binds to the
//! trade type it shares with the input so clients do not have to marshall
//! data into internal types.
pub mod hestia;
