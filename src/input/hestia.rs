use rand::{thread_rng, Rng};
use rand_distr::{Distribution, Uniform};

use crate::exchange::gbce_v1::{Trade, TradeType};

/// Generates between 5 and 10 random trades against one symbol for testing
/// and demonstration. Timestamps fall 1 to 30 minutes before `now` so that
/// some trades land outside the recalculation window, quantities fall in
/// 10 to 100 and trade prices in 50% to 150% of the current price.
pub fn random_trades(symbol: &str, current_price: f64, now: i64) -> Vec<Trade> {
    let age_dist = Uniform::new_inclusive(60, 30 * 60);
    let quantity_dist = Uniform::new_inclusive(10, 100);
    let price_dist = Uniform::new(current_price * 0.5, current_price * 1.5);
    let mut rng = thread_rng();

    let number_of_trades = rng.gen_range(5..=10);
    let mut trades = Vec::with_capacity(number_of_trades);

    for _ in 0..number_of_trades {
        let typ = if rng.gen_bool(0.5) {
            TradeType::Sell
        } else {
            TradeType::Buy
        };

        trades.push(Trade::new(
            symbol,
            now - age_dist.sample(&mut rng),
            quantity_dist.sample(&mut rng),
            typ,
            price_dist.sample(&mut rng),
        ));
    }
    trades
}

#[cfg(test)]
mod tests {
    use super::random_trades;

    #[test]
    fn test_that_random_trades_stay_within_bounds() {
        let now = 1_000_000;
        let trades = random_trades("ABC", 100.0, now);

        assert!(trades.len() >= 5 && trades.len() <= 10);
        for trade in &trades {
            assert_eq!(trade.symbol, "ABC");
            assert!(now - trade.date >= 60);
            assert!(now - trade.date <= 30 * 60);
            assert!(trade.quantity >= 10 && trade.quantity <= 100);
            assert!(trade.price >= 50.0);
            assert!(trade.price <= 150.0);
        }
    }
}
