use std::collections::BTreeMap;

use cambio::Cambio;
use proptest::prelude::*;

use crate::helpers::StubProvider;

const CODES: &[&str] = &["EUR", "GBP", "JPY", "CHF", "CAD"];

fn provider_rates() -> impl Strategy<Value = Option<Vec<(usize, f64)>>> {
    prop::option::weighted(
        0.8,
        prop::collection::vec((0..CODES.len(), 0.0f64..1000.0), 0..5),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn aggregated_value_is_mean_over_reporting_providers(
        specs in prop::collection::vec(provider_rates(), 1..5)
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        const NAMES: &[&str] = &["p0", "p1", "p2", "p3", "p4"];
        let mut builder = Cambio::builder();
        let mut expected: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        let mut any_ok = false;
        for (i, spec) in specs.iter().enumerate() {
            let b = StubProvider::builder(NAMES[i]);
            let p = match spec {
                None => b.fails().build(),
                Some(pairs) => {
                    any_ok = true;
                    let dedup: BTreeMap<&str, f64> =
                        pairs.iter().map(|(c, v)| (CODES[*c], *v)).collect();
                    for (c, v) in &dedup {
                        expected.entry((*c).to_string()).or_default().push(*v);
                    }
                    let owned: Vec<(&str, f64)> = dedup.into_iter().collect();
                    b.returns(&owned).build()
                }
            };
            builder = builder.with_provider(p);
        }
        let cambio = builder.build().unwrap();
        let res = rt.block_on(cambio.get_rates("USD", None));

        if any_ok {
            let rates = res.unwrap().rates.unwrap();
            prop_assert_eq!(rates.len(), expected.len());
            for (code, vals) in &expected {
                let mean = vals.iter().sum::<f64>() / vals.len() as f64;
                prop_assert!((rates[code] - mean).abs() < 1e-9);
            }
        } else {
            prop_assert!(res.is_err());
        }
    }
}
