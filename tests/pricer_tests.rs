
use approx::assert_abs_diff_eq;
use bsm_lib::{price_european, DividendMode, OptionParams, Pricer, PricingError};
use test_utils::{load_golden, random_params, reference_params, seeded_rng, GOLDEN_PATH};

const SWEEP: usize = 500;

/// Every golden row reproduces to 1e-4 on prices and deltas.
#[test]
fn test_golden_values() {
    let rows = load_golden(GOLDEN_PATH).expect("Failed to load golden table");
    assert!(!rows.is_empty(), "golden table is empty");

    for row in &rows {
        let params = row.params();
        let v = price_european(params).expect("golden parameters must be valid");

        assert_abs_diff_eq!(v.call, row.call, epsilon = 1e-4);
        assert_abs_diff_eq!(v.put, row.put, epsilon = 1e-4);
        assert_abs_diff_eq!(v.forward_npv, row.forward_npv, epsilon = 1e-4);
        assert_abs_diff_eq!(v.delta_call, row.delta_call, epsilon = 1e-4);
        assert_abs_diff_eq!(v.delta_put, row.delta_put, epsilon = 1e-4);
        assert_abs_diff_eq!(v.gamma, row.gamma, epsilon = 1e-8);
    }
}

#[test]
fn test_reference_scenario_spread() {
    let v = price_european(reference_params(DividendMode::WithDividend)).unwrap();
    assert_abs_diff_eq!(v.put_call_spread, -101.7946825055, epsilon = 1e-4);
    assert_abs_diff_eq!(v.put_call_spread, v.forward_npv, epsilon = 1e-9);
}

#[test]
fn test_no_dividend_carry_is_neutral() {
    let mut rng = seeded_rng();
    for _ in 0..SWEEP {
        let mut params = random_params(&mut rng);
        params.dividend = DividendMode::NoDividend;
        let pricer = Pricer::new(params).unwrap();

        let carry = pricer.carry_terms();
        assert_eq!(carry.carry_rate, 0.0);
        assert_eq!(carry.discount_factor, 1.0);

        let expected = params.spot - params.strike * (-params.rate * params.years()).exp();
        assert_abs_diff_eq!(pricer.equity_forward_npv(), expected, epsilon = 1e-9 * params.spot);
    }
}

#[test]
fn test_put_call_parity() {
    let mut rng = seeded_rng();
    for _ in 0..SWEEP {
        let params = random_params(&mut rng);
        let pricer = Pricer::new(params).unwrap();
        let (call, put) = pricer.call_put_prices();
        let carry = pricer.carry_terms();

        let expected = params.spot * carry.discount_factor
            - params.strike * (-params.rate * params.years()).exp();
        assert_abs_diff_eq!(call - put, expected, epsilon = 1e-9);
    }
}

#[test]
fn test_delta_spread_is_yield_factor() {
    let mut rng = seeded_rng();
    for _ in 0..SWEEP {
        let params = random_params(&mut rng);
        let (delta_call, delta_put) = Pricer::new(params).unwrap().deltas();
        let expected = (-params.dividend_yield * params.years()).exp();
        assert_abs_diff_eq!(delta_call - delta_put, expected, epsilon = 1e-12);
        assert!(delta_call >= 0.0 && delta_put <= 0.0);
    }
}

#[test]
fn test_gamma_is_positive() {
    let mut rng = seeded_rng();
    for _ in 0..SWEEP {
        let params = random_params(&mut rng);
        assert!(Pricer::new(params).unwrap().gamma() >= 0.0);
    }
}

/// Call and put prices strictly increase with volatility.
#[test]
fn test_prices_increase_with_volatility() {
    let rows = load_golden(GOLDEN_PATH).expect("Failed to load golden table");
    for row in &rows {
        let base = row.params();
        let mut previous: Option<(f64, f64)> = None;
        for step in 1..=16 {
            let params = OptionParams {
                volatility: 0.05 * step as f64,
                ..base
            };
            let (call, put) = Pricer::new(params).unwrap().call_put_prices();
            if let Some((prev_call, prev_put)) = previous {
                assert!(
                    call > prev_call,
                    "call not increasing at vol {}: {} <= {}",
                    params.volatility,
                    call,
                    prev_call
                );
                assert!(
                    put > prev_put,
                    "put not increasing at vol {}: {} <= {}",
                    params.volatility,
                    put,
                    prev_put
                );
            }
            previous = Some((call, put));
        }
    }
}

/// Prices converge to intrinsic value as the term shrinks to zero.
#[test]
fn test_short_term_limit_is_intrinsic() {
    let tiny_term_months = 1e-6 * 12.0;
    for dividend in [DividendMode::WithDividend, DividendMode::NoDividend] {
        for (strike, spot) in [(4200.0, 4100.0), (4100.0, 4200.0), (100.0, 100.5)] {
            let params = OptionParams {
                strike,
                spot,
                term_months: tiny_term_months,
                ..reference_params(dividend)
            };
            let (call, put) = Pricer::new(params).unwrap().call_put_prices();
            assert_abs_diff_eq!(call, (spot - strike).max(0.0), epsilon = 1e-3);
            assert_abs_diff_eq!(put, (strike - spot).max(0.0), epsilon = 1e-3);
        }
    }
}

#[test]
fn test_zero_strike_or_spot_fails_before_pricing() {
    let params = OptionParams {
        strike: 0.0,
        ..reference_params(DividendMode::WithDividend)
    };
    match price_european(params) {
        Err(PricingError::Domain { parameter, value, .. }) => {
            assert_eq!(parameter, "strike");
            assert_eq!(value, 0.0);
        }
        other => panic!("expected domain error, got {:?}", other),
    }

    let params = OptionParams {
        spot: 0.0,
        ..reference_params(DividendMode::NoDividend)
    };
    let err = price_european(params).unwrap_err();
    assert_eq!(err.parameter(), Some("spot"));
    assert!(err.to_string().contains("spot"));
}

#[test]
fn test_non_positive_term_and_volatility_fail() {
    for (term_months, volatility, parameter) in
        [(0.0, 0.15, "term_months"), (3.0, 0.0, "volatility"), (3.0, -0.2, "volatility")]
    {
        let params = OptionParams {
            term_months,
            volatility,
            ..reference_params(DividendMode::WithDividend)
        };
        assert_eq!(Pricer::new(params).unwrap_err().parameter(), Some(parameter));
    }
}

#[test]
fn test_pricers_evaluate_independently_across_threads() {
    let mut rng = seeded_rng();
    let pricers: Vec<Pricer> = (0..8)
        .map(|_| Pricer::new(random_params(&mut rng)).unwrap())
        .collect();
    let sequential: Vec<_> = pricers.iter().map(Pricer::valuation).collect();

    let concurrent: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = pricers
            .iter()
            .map(|pricer| scope.spawn(move || pricer.valuation()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, concurrent);
}
