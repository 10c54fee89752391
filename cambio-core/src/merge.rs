use std::collections::BTreeMap;

use crate::{AGGREGATED_DATASOURCE, RateTable, Rates};

/// Average rates per target currency across tables.
///
/// - The result's keys are the union of every table's keys.
/// - Each value is the arithmetic mean over the tables that contain that key; a table
///   lacking the key contributes nothing (it is not counted as zero).
/// - Tables with absent `rates` are skipped.
/// - No rounding is applied.
pub fn average_rates<'a, I>(tables: I) -> Rates
where
    I: IntoIterator<Item = &'a RateTable>,
{
    let mut acc: BTreeMap<&'a str, (f64, u32)> = BTreeMap::new();
    for rates in tables.into_iter().filter_map(|t| t.rates.as_ref()) {
        for (currency, value) in rates {
            let slot = acc.entry(currency.as_str()).or_insert((0.0, 0));
            slot.0 += value;
            slot.1 += 1;
        }
    }
    acc.into_iter()
        .map(|(currency, (sum, n))| (currency.to_string(), sum / f64::from(n)))
        .collect()
}

/// Fold successful provider tables into one table tagged with [`AGGREGATED_DATASOURCE`].
///
/// The result always carries a (possibly empty) rate mapping and no timestamp; callers
/// stamp it when they publish it.
pub fn aggregate<'a, I>(base: &str, tables: I) -> RateTable
where
    I: IntoIterator<Item = &'a RateTable>,
{
    RateTable::new(AGGREGATED_DATASOURCE, base, average_rates(tables))
}
