use anyhow::Result;
use time::OffsetDateTime;

use gbce::exchange::gbce_v1::{GbceV1, PriceEarnings, Stock, TradeType};
use gbce::input::hestia;

fn print_summary(stock: &Stock) {
    println!("Stock symbol: {}", stock.get_symbol());
    if stock.is_preferred() {
        println!("Preferred stock");
    } else {
        println!("Common stock");
    }
    println!("Par value: {}", stock.get_par_value());
    println!("Last dividend: {}", stock.get_last_dividend());
    if let Some(fixed_dividend) = stock.get_fixed_dividend() {
        println!("Fixed dividend: {}", fixed_dividend);
    }

    if !stock.get_trades().is_empty() {
        println!("Trade history for this stock:");
        for trade in stock.get_trades_by_date() {
            let typ = match trade.typ {
                TradeType::Sell => "Sale",
                TradeType::Buy => "Purchase",
            };
            println!(
                "\t{}\t{}\t{}\t{}\t{}",
                trade.symbol, trade.date, trade.quantity, typ, trade.price
            );
        }
    }

    println!("Stock price: {}", stock.get_price());
    match stock.dividend_yield() {
        Ok(dividend_yield) => println!("Dividend yield: {}", dividend_yield),
        Err(err) => println!("Dividend yield: unavailable ({})", err),
    }
    match stock.price_earnings_ratio() {
        PriceEarnings::Ratio(ratio) => println!("P/E ratio: {}", ratio),
        PriceEarnings::NotApplicable => println!("P/E ratio: N/A"),
    }
    println!();
}

fn main() -> Result<()> {
    env_logger::init();

    let now = OffsetDateTime::now_utc().unix_timestamp();
    let mut exchange = GbceV1::new();

    exchange.add_stock("TEA", 123.0, false, 100, 0, None)?;
    exchange.add_stock("POP", 135.0, false, 100, 8, None)?;
    exchange.add_stock("ALE", 246.0, false, 60, 23, None)?;
    exchange.add_stock("GIN", 159.0, true, 100, 8, Some(0.02))?;
    exchange.add_stock("JOE", 321.0, false, 250, 13, None)?;

    for symbol in exchange.symbols() {
        //Unwrap is safe, the symbol was just returned by the exchange
        let current_price = exchange.get_stock(&symbol).unwrap().get_price();
        for trade in hestia::random_trades(&symbol, current_price, now) {
            exchange.record_trade(trade)?;
        }

        exchange.recalculate_price(&symbol, now)?;
        print_summary(exchange.get_stock(&symbol).unwrap());
    }

    println!("GBCE All Share Index: {}", exchange.calculate_index()?);
    Ok(())
}
