use std::collections::HashMap;

use derive_more::{Display, Error};
use log::info;
use serde::{Deserialize, Serialize};

/// Trailing window used by price recalculation, inclusive at the boundary.
pub const PRICE_WINDOW_SECS: i64 = 15 * 60;

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum TradeType {
    Buy,
    Sell,
}

/// A single executed transaction. Constructed once and never mutated, held
/// only inside the history of the stock it was recorded against.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Trade {
    pub symbol: String,
    /// Unix epoch seconds, UTC.
    pub date: i64,
    pub quantity: u64,
    pub typ: TradeType,
    pub price: f64,
}

impl Trade {
    pub fn new(
        symbol: impl Into<String>,
        date: i64,
        quantity: u64,
        typ: TradeType,
        price: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            date,
            quantity,
            typ,
            price,
        }
    }
}

/// Price/earnings ratio result. A ratio that is undefined because the last
/// dividend is zero, or that comes out non-positive, is a business "N/A"
/// rather than a fault so both map to the same variant.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub enum PriceEarnings {
    Ratio(f64),
    NotApplicable,
}

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum GbceError {
    UnknownSymbol,
    DuplicateSymbol,
    ZeroPrice,
    MissingFixedDividend,
    EmptyExchange,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Stock {
    symbol: String,
    price: f64,
    is_preferred: bool,
    par_value: i64,
    last_dividend: i64,
    fixed_dividend: Option<f64>,
    trades: Vec<Trade>,
}

impl Stock {
    /// `fixed_dividend` should be set iff the stock is preferred; it is
    /// meaningless for common stock and the yield calculation never reads it
    /// on that path.
    pub fn new(
        symbol: impl Into<String>,
        price: f64,
        is_preferred: bool,
        par_value: i64,
        last_dividend: i64,
        fixed_dividend: Option<f64>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            is_preferred,
            par_value,
            last_dividend,
            fixed_dividend,
            trades: Vec::new(),
        }
    }

    pub fn get_symbol(&self) -> &str {
        &self.symbol
    }

    pub fn get_price(&self) -> f64 {
        self.price
    }

    pub fn is_preferred(&self) -> bool {
        self.is_preferred
    }

    pub fn get_par_value(&self) -> i64 {
        self.par_value
    }

    pub fn get_last_dividend(&self) -> i64 {
        self.last_dividend
    }

    pub fn get_fixed_dividend(&self) -> Option<f64> {
        self.fixed_dividend
    }

    /// History in recording order.
    pub fn get_trades(&self) -> &[Trade] {
        &self.trades
    }

    /// History sorted by timestamp ascending, used for reporting. Recording
    /// order is not necessarily chronological so this allocates.
    pub fn get_trades_by_date(&self) -> Vec<Trade> {
        let mut sorted = self.trades.clone();
        sorted.sort_by_key(|trade| trade.date);
        sorted
    }

    /// Preferred stock yields `(par_value * fixed_dividend) / price`, common
    /// stock yields `last_dividend / price`.
    pub fn dividend_yield(&self) -> Result<f64, GbceError> {
        if self.price == 0.0 {
            return Err(GbceError::ZeroPrice);
        }
        if self.is_preferred {
            let fixed = self
                .fixed_dividend
                .ok_or(GbceError::MissingFixedDividend)?;
            Ok((self.par_value as f64 * fixed) / self.price)
        } else {
            Ok(self.last_dividend as f64 / self.price)
        }
    }

    pub fn price_earnings_ratio(&self) -> PriceEarnings {
        if self.last_dividend == 0 {
            return PriceEarnings::NotApplicable;
        }
        let ratio = self.price / self.last_dividend as f64;
        if ratio <= 0.0 {
            PriceEarnings::NotApplicable
        } else {
            PriceEarnings::Ratio(ratio)
        }
    }

    /// Appends to the history preserving call order. The trade's symbol
    /// should equal this stock's symbol; this is a caller contract and is not
    /// checked here, the exchange-level dispatch is the guard in practice.
    pub fn record_trade(&mut self, trade: Trade) {
        self.trades.push(trade);
    }

    /// Recalculates the price as the volume-weighted average of all trades
    /// executed in the trailing window ending at `now`. Buys and sells
    /// contribute identically. With no qualifying trades the price is left
    /// unchanged and returned, which is the designed no-op path rather than
    /// an error.
    pub fn recalculate_price(&mut self, now: i64) -> f64 {
        let mut total_value = 0.0;
        let mut total_quantity = 0u64;

        for trade in &self.trades {
            if now - trade.date <= PRICE_WINDOW_SECS {
                total_value += trade.price * trade.quantity as f64;
                total_quantity += trade.quantity;
            }
        }

        if total_quantity > 0 {
            self.price = total_value / total_quantity as f64;
        }
        self.price
    }
}

/// In-memory exchange holding at most one stock per symbol. Stocks are only
/// ever added within the current scope, never removed.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GbceV1 {
    stocks: HashMap<String, Stock>,
}

impl GbceV1 {
    pub fn new() -> Self {
        Self {
            stocks: HashMap::new(),
        }
    }

    /// Registers a new stock. An attempt to add a symbol that is already
    /// present is rejected without touching the existing entry.
    pub fn add_stock(
        &mut self,
        symbol: impl Into<String>,
        price: f64,
        is_preferred: bool,
        par_value: i64,
        last_dividend: i64,
        fixed_dividend: Option<f64>,
    ) -> Result<(), GbceError> {
        let symbol = symbol.into();
        if self.stocks.contains_key(&symbol) {
            info!("EXCHANGE: Could not add {}, symbol already exists", symbol);
            return Err(GbceError::DuplicateSymbol);
        }
        let stock = Stock::new(
            symbol.clone(),
            price,
            is_preferred,
            par_value,
            last_dividend,
            fixed_dividend,
        );
        self.stocks.insert(symbol, stock);
        Ok(())
    }

    pub fn get_stock(&self, symbol: &str) -> Option<&Stock> {
        self.stocks.get(symbol)
    }

    /// Symbols sorted ascending so that reporting over the exchange is
    /// deterministic.
    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.stocks.keys().cloned().collect();
        symbols.sort();
        symbols
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Dispatches the trade to the stock it references by symbol.
    pub fn record_trade(&mut self, trade: Trade) -> Result<(), GbceError> {
        if let Some(stock) = self.stocks.get_mut(&trade.symbol) {
            stock.record_trade(trade);
            Ok(())
        } else {
            info!(
                "EXCHANGE: No stock with symbol {}, could not record trade",
                trade.symbol
            );
            Err(GbceError::UnknownSymbol)
        }
    }

    pub fn recalculate_price(&mut self, symbol: &str, now: i64) -> Result<f64, GbceError> {
        if let Some(stock) = self.stocks.get_mut(symbol) {
            Ok(stock.recalculate_price(now))
        } else {
            info!(
                "EXCHANGE: No stock with symbol {}, could not recalculate price",
                symbol
            );
            Err(GbceError::UnknownSymbol)
        }
    }

    /// The GBCE All Share Index: the geometric mean of the current price of
    /// every held stock. Undefined over zero stocks so an empty exchange is
    /// reported as an error rather than propagating NaN.
    pub fn calculate_index(&self) -> Result<f64, GbceError> {
        if self.stocks.is_empty() {
            return Err(GbceError::EmptyExchange);
        }
        let product: f64 = self.stocks.values().map(|stock| stock.price).product();
        Ok(product.powf(1.0 / self.stocks.len() as f64))
    }
}
