use ops::{PerpBalance, SpotBalance};

/// Spot balances as a fixed-width table. Assets with a zero total are
/// hidden.
pub fn spot_table(balances: &[SpotBalance]) -> String {
    let mut out = String::from("Spot balances\n");
    out.push_str(&format!(
        "{:<10} {:>18} {:>18} {:>18}\n",
        "Asset", "Free", "Locked", "Total"
    ));

    for balance in balances {
        let free = balance.free.parse::<f64>().unwrap_or(0.0);
        let locked = balance.locked.parse::<f64>().unwrap_or(0.0);
        let total = free + locked;
        if total > 0.0 {
            out.push_str(&format!(
                "{:<10} {:>18.8} {:>18.8} {:>18.8}\n",
                balance.asset, free, locked, total
            ));
        }
    }
    out
}

/// Perpetual-futures balance as a name/value listing.
pub fn perp_table(balance: &PerpBalance) -> String {
    let fields = [
        ("asset", balance.asset.as_str()),
        ("balance", balance.balance.as_str()),
        ("equity", balance.equity.as_str()),
        ("unrealizedProfit", balance.unrealized_profit.as_str()),
        ("realisedProfit", balance.realised_profit.as_str()),
        ("availableMargin", balance.available_margin.as_str()),
        ("usedMargin", balance.used_margin.as_str()),
        ("freezedMargin", balance.freezed_margin.as_str()),
    ];

    let mut out = String::from("Perpetual futures\n");
    for (name, value) in fields {
        out.push_str(&format!("{name:<18} {value:>18}\n"));
    }
    out
}
