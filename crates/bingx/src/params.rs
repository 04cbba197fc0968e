use std::collections::BTreeMap;

/// Unordered request parameters for one signed call. Keys are unique;
/// insertion order is irrelevant because canonicalization re-sorts.
///
/// Values must already be plain ASCII tokens (decimal numbers, enum strings,
/// addresses). No URL-encoding is performed, so a value containing `&` or
/// `=` violates the caller contract and yields a query the exchange will
/// refuse as badly signed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSet {
    entries: BTreeMap<String, String>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Produce the exact byte sequence that gets signed: keys in
    /// lexicographic order joined as `key=value` with `&`, then the
    /// timestamp as the last pair. An empty set yields `timestamp=<ms>`
    /// with no leading `&`; the exchange rejects a leading separator.
    pub fn canonical(&self, timestamp_ms: u64) -> String {
        let mut query = self
            .entries
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        if query.is_empty() {
            return format!("timestamp={timestamp_ms}");
        }
        query.push_str(&format!("&timestamp={timestamp_ms}"));
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_leading_separator() {
        let params = ParamSet::new();
        assert_eq!(params.canonical(1_700_000_000_000), "timestamp=1700000000000");
    }

    #[test]
    fn keys_are_sorted_before_timestamp_is_appended() {
        let mut params = ParamSet::new();
        params.insert("b", "2");
        params.insert("a", "1");
        assert_eq!(params.canonical(1_700_000_000_000), "a=1&b=2&timestamp=1700000000000");
    }

    #[test]
    fn timestamp_stays_last_even_when_it_sorts_first() {
        // "z" sorts after "timestamp"; the timestamp must still come last.
        let mut params = ParamSet::new();
        params.insert("z", "9");
        assert_eq!(params.canonical(7), "z=9&timestamp=7");
    }

    #[test]
    fn canonicalization_is_deterministic() {
        let mut a = ParamSet::new();
        a.insert("symbol", "BTC-USDT");
        a.insert("recvWindow", "6000");

        let mut b = ParamSet::new();
        b.insert("recvWindow", "6000");
        b.insert("symbol", "BTC-USDT");

        assert_eq!(a.canonical(42), b.canonical(42));
    }

    #[test]
    fn duplicate_insert_keeps_the_last_value() {
        let mut params = ParamSet::new();
        params.insert("asset", "BTC");
        params.insert("asset", "USDT");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("asset"), Some("USDT"));
    }
}
