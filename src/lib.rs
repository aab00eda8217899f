//! # How does gbce work?
//!
//! The library models a small stock exchange, the Global Beverage Corporation
//! Exchange, entirely in memory. An exchange owns a set of stocks keyed by
//! symbol, each stock owns its trade history and current price, and all of the
//! non-trivial logic sits in the calculations that run over that state:
//! dividend yield, price/earnings ratio, the volume-weighted trailing price and
//! the all-share index.
//!
//! Everything is single-threaded and synchronous. There is no persistence and
//! no network boundary; the API surface is [exchange::gbce_v1::GbceV1] and the
//! types it hands out. Clients that need to serve concurrent callers should
//! wrap the exchange in their own synchronization as both trade recording and
//! price recalculation read then write.
//!
//! Expected, recoverable conditions (unknown symbol, duplicate symbol, the
//! undefined-division cases) are returned as typed errors rather than panics.
//! A price/earnings ratio that is undefined for business reasons is not an
//! error at all but the [exchange::gbce_v1::PriceEarnings::NotApplicable]
//! sentinel.
//!
//! Inputs generate data for the exchange to consume. The only input currently
//! provided is random trade generation used by the demo binary and tests.
pub mod exchange;
pub mod input;
