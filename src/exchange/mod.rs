//! Exchanges are the main interface presented to clients. They support the
//! operations used to register stocks, record executed trades and trigger
//! price recalculation. The calculation logic itself lives with the stock that
//! owns the underlying trade history, and the logic contained within the
//! exchange primarily relates to dispatch by symbol and the cross-stock index.
pub mod gbce_v1;
