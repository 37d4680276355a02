use std::sync::Arc;
use std::thread;

use core_types::{AppliedPrice, Symbol, Timeframe};
use rust_decimal_macros::dec;
use strategies::obv;
use strategies::{
    FieldMap, FieldTarget, IndicatorParams, ParamField, ParamOverride, StrategyOverride,
    StrategyParams, SymbolSet,
};
use strategy_config::{DefaultRegistry, Error, OverrideRegistry, Resolver, load_builtin};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn eurusd() -> Symbol {
    Symbol::from("EURUSD")
}

/// A resolver whose only kind has zero defaults and a single H4 table.
fn h4_only_resolver() -> Resolver {
    let mut defaults = DefaultRegistry::new();
    defaults
        .register_indicator("OBV", IndicatorParams::default())
        .unwrap();
    defaults
        .register_strategy("OBV", StrategyParams::default())
        .unwrap();

    let mut overrides = OverrideRegistry::new();
    overrides
        .insert_timeframe(
            "OBV",
            Timeframe::H4,
            ParamOverride {
                strategy: StrategyOverride {
                    signal_open_method: Some(2),
                    max_spread: Some(dec!(0)),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .unwrap();

    Resolver::new(defaults, overrides)
}

#[test]
fn timeframe_table_applies_when_no_symbol_table_exists() {
    init_tracing();
    let resolver = h4_only_resolver();

    let cfg = resolver.resolve("OBV", &eurusd(), Timeframe::H4).unwrap();

    assert_eq!(cfg.strategy().signal_open_method, 2);
    assert_eq!(cfg.strategy().max_spread, dec!(0));
    assert_eq!(cfg.kind(), "OBV");
    assert_eq!(cfg.symbol(), &eurusd());
    assert_eq!(cfg.timeframe(), Timeframe::H4);
}

#[test]
fn builtin_eurusd_m5_takes_symbol_set_values() {
    init_tracing();
    let resolver = load_builtin().unwrap();

    let cfg = resolver.resolve(obv::KIND, &eurusd(), Timeframe::M5).unwrap();

    // No M5 timeframe table: everything not in the set comes from defaults.
    assert!(resolver.overrides().timeframe_override(obv::KIND, Timeframe::M5).is_none());
    assert_eq!(cfg.strategy().max_spread, dec!(3));
    assert_eq!(cfg.strategy().signal_open_method, -61);
    assert_eq!(cfg.strategy().signal_open_level, dec!(36));
    assert_eq!(cfg.strategy().signal_close_method, 1);
    assert_eq!(cfg.strategy().signal_close_level, dec!(36));
    assert_eq!(cfg.strategy().lot_size, dec!(0));
    assert_eq!(cfg.strategy().tick_filter_method, 0);
    assert_eq!(cfg.indicator().applied_price, AppliedPrice::Low);
    assert_eq!(cfg.indicator().period, None);
}

#[test]
fn unknown_kind_fails_without_partial_result() {
    let resolver = load_builtin().unwrap();

    let result = resolver.resolve("UnknownIndicator", &eurusd(), Timeframe::H4);

    assert_eq!(
        result,
        Err(Error::UnknownKind {
            kind: "UnknownIndicator".to_string()
        })
    );
}

#[test]
fn resolution_is_deterministic() {
    let resolver = load_builtin().unwrap();
    for tf in Timeframe::ALL {
        for symbol in ["EURUSD", "GBPUSD"] {
            let symbol = Symbol::from(symbol);
            let first = resolver.resolve(obv::KIND, &symbol, tf).unwrap();
            let second = resolver.resolve(obv::KIND, &symbol, tf).unwrap();
            assert_eq!(first, second, "{symbol} {tf}");
        }
    }

    // Two independently loaded resolvers agree as well.
    let other = load_builtin().unwrap();
    assert_eq!(
        resolver.resolve(obv::KIND, &eurusd(), Timeframe::H4).unwrap(),
        other.resolve(obv::KIND, &eurusd(), Timeframe::H4).unwrap()
    );
}

#[test]
fn symbol_table_beats_timeframe_table() {
    let resolver = load_builtin().unwrap();

    // The H4 timeframe table sets open level 0 and spread 0; the EURUSD H4
    // set says 36 and 10.
    let eur = resolver.resolve(obv::KIND, &eurusd(), Timeframe::H4).unwrap();
    let gbp = resolver
        .resolve(obv::KIND, &Symbol::from("GBPUSD"), Timeframe::H4)
        .unwrap();

    assert_eq!(eur.strategy().signal_open_level, dec!(36));
    assert_eq!(eur.strategy().max_spread, dec!(10));
    assert_eq!(eur.indicator().applied_price, AppliedPrice::Low);
    assert_eq!(gbp.strategy().signal_open_level, dec!(0));
    assert_eq!(gbp.strategy().max_spread, dec!(0));
    assert_eq!(gbp.indicator().applied_price, AppliedPrice::Close);

    // Fields the set leaves out still come from the timeframe table.
    assert_eq!(eur.strategy().signal_open_filter, 1);
    assert_eq!(eur.strategy().price_stop_level, dec!(2));
    assert_eq!(eur.strategy().tick_filter_method, 1);
    assert_eq!(eur.indicator().period, Some(Timeframe::H4));
}

#[test]
fn symbol_table_precedence_over_every_field() {
    let mut defaults = DefaultRegistry::new();
    defaults.register_indicator("K", IndicatorParams::default()).unwrap();
    defaults
        .register_strategy(
            "K",
            StrategyParams {
                signal_close_method: 5,
                ..Default::default()
            },
        )
        .unwrap();

    let unflattened: Vec<ParamField> = ParamField::ALL
        .into_iter()
        .filter(|field| !matches!(field, ParamField::SignalCloseMethod | ParamField::Shift))
        .collect();
    let mut overrides = OverrideRegistry::new();
    overrides
        .register_field_map(
            "K",
            FieldMap::new(
                "K",
                &[
                    ("K_Close", FieldTarget::Param(ParamField::SignalCloseMethod)),
                    ("K_Shift", FieldTarget::Param(ParamField::Shift)),
                ],
                &unflattened,
            )
            .unwrap(),
        )
        .unwrap();
    overrides
        .insert_timeframe(
            "K",
            Timeframe::M30,
            ParamOverride {
                strategy: StrategyOverride {
                    signal_close_method: Some(7),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .unwrap();
    overrides
        .insert_symbol_set(
            "K",
            &SymbolSet {
                symbol: eurusd(),
                timeframe: Timeframe::M30,
                values: vec![("K_Close", dec!(9)), ("K_Shift", dec!(1))],
            },
        )
        .unwrap();
    let resolver = Resolver::new(defaults, overrides);

    let cfg = resolver.resolve("K", &eurusd(), Timeframe::M30).unwrap();
    assert_eq!(cfg.strategy().signal_close_method, 9);
    assert_eq!(cfg.indicator().shift, 1);

    let params = cfg.params();
    assert_eq!(&params.strategy, cfg.strategy());
    assert_eq!(&params.indicator, cfg.indicator());
}

#[test]
fn fields_absent_from_both_layers_equal_defaults() {
    let resolver = load_builtin().unwrap();
    let defaults = resolver.defaults().strategy_defaults(obv::KIND).unwrap();

    // Neither the H4 table nor the EURUSD H4 set touches the profit fields.
    let cfg = resolver.resolve(obv::KIND, &eurusd(), Timeframe::H4).unwrap();
    assert_eq!(cfg.strategy().price_profit_method, defaults.price_profit_method);
    assert_eq!(cfg.strategy().price_profit_level, defaults.price_profit_level);

    // M15 does not set the open filter.
    let cfg = resolver.resolve(obv::KIND, &eurusd(), Timeframe::M15).unwrap();
    assert_eq!(cfg.strategy().signal_open_filter, defaults.signal_open_filter);

    // H1 has no table at all.
    let cfg = resolver.resolve(obv::KIND, &eurusd(), Timeframe::H1).unwrap();
    assert_eq!(cfg.strategy(), &defaults);
    assert_eq!(
        cfg.indicator(),
        &resolver.defaults().indicator_defaults(obv::KIND).unwrap()
    );
    assert_eq!(cfg.params(), &resolver.defaults().defaults(obv::KIND).unwrap());
}

#[test]
fn overriding_one_timeframe_leaves_others_alone() {
    let mut defaults = DefaultRegistry::new();
    defaults.register(&obv::Obv).unwrap();
    let mut overrides = OverrideRegistry::new();
    overrides.register(&obv::Obv).unwrap();

    let before = Resolver::new(defaults, overrides)
        .resolve(obv::KIND, &eurusd(), Timeframe::H8)
        .unwrap();

    let mut defaults = DefaultRegistry::new();
    defaults.register(&obv::Obv).unwrap();
    let mut overrides = OverrideRegistry::new();
    overrides.register(&obv::Obv).unwrap();
    overrides
        .replace_timeframe(
            obv::KIND,
            Timeframe::H4,
            ParamOverride {
                strategy: StrategyOverride {
                    signal_open_method: Some(42),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .unwrap();
    let resolver = Resolver::new(defaults, overrides);

    let after = resolver.resolve(obv::KIND, &eurusd(), Timeframe::H8).unwrap();
    assert_eq!(before, after);
    assert_eq!(
        resolver
            .resolve(obv::KIND, &eurusd(), Timeframe::H4)
            .unwrap()
            .strategy()
            .signal_open_method,
        42
    );
}

#[test]
fn builtin_h8_uses_timeframe_only_table() {
    let resolver = load_builtin().unwrap();
    let cfg = resolver.resolve(obv::KIND, &eurusd(), Timeframe::H8).unwrap();

    assert_eq!(cfg.strategy().signal_open_method, 2);
    assert_eq!(cfg.strategy().signal_close_method, 2);
    assert_eq!(cfg.strategy().price_profit_method, 60);
    assert_eq!(cfg.strategy().price_stop_level, dec!(6));
    assert_eq!(cfg.indicator().period, Some(Timeframe::H8));
}

#[test]
fn shared_resolver_serves_concurrent_readers() {
    let resolver = Arc::new(load_builtin().unwrap());
    let expected = resolver.resolve(obv::KIND, &eurusd(), Timeframe::M5).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                resolver
                    .resolve(obv::KIND, &Symbol::from("EURUSD"), Timeframe::M5)
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn resolved_parts_go_to_their_engines() {
    let resolver = load_builtin().unwrap();
    let cfg = resolver.resolve(obv::KIND, &eurusd(), Timeframe::M1).unwrap();

    let (indicator, strategy) = cfg.into_parts();
    assert_eq!(indicator.period, Some(Timeframe::M1));
    assert_eq!(strategy.signal_open_filter, 32);
}
