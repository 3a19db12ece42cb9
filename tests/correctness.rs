//! Correctness and invariant tests for describe
//!
//! These tests pin the statistics produced for fixed datasets and check the
//! properties that must hold for any dataset. They complement the unit tests
//! in each module by exercising the public API end to end.
//!
//! Run with: cargo test --test correctness

use describe::quantiles::{percentile, quantile, Quartile, Rank};
use describe::statistics::{Statistics, DEFAULT_PERCENTILE_RANKS};
use describe::traits::{RangeError, StatsError};
use describe::value::Value;

/// 100 uniform draws from [1, 1000], Mersenne Twister seeded with 1234
const DRAWS_1_1000: [i64; 100] = [
    990, 797, 452, 120, 8, 93, 933, 966, 962, 827, 597, 36, 688, 710, 86, 101, 785, 364,
    243, 18, 32, 808, 17, 355, 664, 639, 496, 631, 475, 153, 94, 188, 731, 118, 866, 15,
    516, 499, 902, 989, 256, 67, 684, 555, 935, 478, 71, 616, 692, 92, 528, 593, 48, 277,
    845, 570, 65, 661, 310, 493, 871, 364, 273, 256, 672, 956, 205, 465, 898, 543, 682, 20,
    965, 521, 73, 6, 342, 148, 728, 485, 674, 387, 172, 56, 79, 602, 509, 168, 78, 571, 221,
    148, 28, 960, 355, 790, 114, 980, 543, 145,
];

/// 78 uniform draws from [1, 100], same generator and seed
const DRAWS_1_100: [i64; 78] = [
    100, 57, 15, 1, 12, 75, 5, 86, 89, 11, 13, 99, 46, 31, 3, 4, 3, 45, 83, 80, 62, 79, 60,
    20, 12, 24, 92, 15, 2, 65, 63, 32, 9, 86, 70, 60, 9, 77, 87, 12, 66, 75, 6, 35, 72, 9,
    83, 39, 62, 46, 35, 32, 84, 26, 59, 68, 86, 3, 66, 10, 1, 43, 19, 91, 61, 85, 49, 22, 7,
    10, 76, 64, 21, 10, 72, 28, 19, 4,
];

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {} to be within {} of {}",
        actual,
        tolerance,
        expected
    );
}

fn stats_of(values: &[i64]) -> Statistics {
    let mut stats = Statistics::new();
    for &v in values {
        stats.update(v).unwrap();
    }
    stats
}

fn as_f64(values: &[i64]) -> Vec<f64> {
    values.iter().map(|&v| v as f64).collect()
}

// ============================================================================
// End-to-end summary
// ============================================================================

mod summary {
    use super::*;

    #[test]
    fn min_max_values() {
        let summary = stats_of(&DRAWS_1_1000).compute().unwrap();
        assert_eq!(summary["min"], Value::Int(6));
        assert_eq!(summary["max"], Value::Int(990));
    }

    #[test]
    fn sum_count_values() {
        let summary = stats_of(&DRAWS_1_1000).compute().unwrap();
        assert_eq!(summary["sum"], Value::Int(44853));
        assert_eq!(summary["count"], Value::Int(100));
    }

    #[test]
    fn mean_median_values() {
        let summary = stats_of(&DRAWS_1_1000).compute().unwrap();
        assert_close(summary["mean"].as_f64(), 448.53, 1e-9);
        assert_close(summary["median"].as_f64(), 481.5, 1e-9);
    }

    #[test]
    fn stddev_value() {
        let summary = stats_of(&DRAWS_1_1000).compute().unwrap();
        let stddev = summary["stddev"].as_f64();
        assert_close(stddev, 313.229_515_052_461_2, 1e-7);
        assert_close(stddev, 313.229_515_1, 1e-9);
    }

    #[test]
    fn percentile_values() {
        let summary = stats_of(&DRAWS_1_1000).compute().unwrap();
        let expected = [
            ("10th", 55.2),
            ("30th", 170.8),
            ("50th", 481.5),
            ("70th", 661.9),
            ("90th", 905.1),
            ("95th", 962.15),
            ("97th", 966.42),
            ("99th", 989.01),
        ];
        for (key, value) in expected {
            assert_close(summary[key].as_f64(), value, 1e-9);
        }
    }

    #[test]
    fn quartile_values() {
        let summary = stats_of(&DRAWS_1_1000).compute().unwrap();
        assert_close(summary["q1"].as_f64(), 132.5, 1e-9);
        assert_close(summary["q3"].as_f64(), 686.0, 1e-9);
        assert_close(summary["iqr"].as_f64(), 553.5, 1e-9);
    }

    #[test]
    fn quartiles_differ_from_percentiles() {
        let stats = stats_of(&DRAWS_1_1000);
        let summary = stats.compute().unwrap();

        assert_close(stats.percentile(25).unwrap(), 138.75, 1e-9);
        assert_close(stats.percentile(75).unwrap(), 685.0, 1e-9);
        assert_ne!(summary["q1"].as_f64(), stats.percentile(25).unwrap());
        assert_ne!(summary["q3"].as_f64(), stats.percentile(75).unwrap());
    }

    #[test]
    fn new_percentiles_list() {
        let mut stats = stats_of(&DRAWS_1_1000);

        let old = stats.set_percentile_ranks([15, 35, 75]);
        assert_eq!(stats.percentile_ranks(), [15, 35, 75]);

        let summary = stats.compute().unwrap();
        assert!(summary.contains_key("15th"));
        assert!(summary.contains_key("75th"));
        assert!(!summary.contains_key("10th"));

        stats.set_percentile_ranks(old.clone());
        assert_eq!(stats.percentile_ranks(), old.as_slice());
        assert_eq!(stats.percentile_ranks(), DEFAULT_PERCENTILE_RANKS);
    }

    #[test]
    fn add_non_numeric_value() {
        let mut stats = stats_of(&DRAWS_1_1000);
        assert_eq!(stats.update("a"), Err(StatsError::TypeKind { found: "&str" }));
        assert_eq!(
            stats.update(String::from("1")),
            Err(StatsError::TypeKind { found: "String" })
        );
        assert_eq!(stats.len(), 100);
    }
}

// ============================================================================
// Percentiles
// ============================================================================

mod percentiles {
    use super::*;

    fn zero_to_99() -> Statistics {
        let mut stats = Statistics::new();
        stats.try_extend(0..100).unwrap();
        stats
    }

    #[test]
    fn empty_values() {
        let stats = Statistics::new();
        assert_eq!(stats.percentile(50), Err(StatsError::EmptyDataset));
    }

    #[test]
    fn only_one_value() {
        let stats = stats_of(&[1234]);
        assert_eq!(stats.percentile(35), Ok(1234.0));
        assert_eq!(stats.percentile(50), Ok(1234.0));
        assert_eq!(stats.percentile(75), Ok(1234.0));
    }

    #[test]
    fn float_rank_is_too_big() {
        assert_eq!(
            zero_to_99().percentile(3.5),
            Err(StatsError::Range(RangeError::Fraction(3.5)))
        );
    }

    #[test]
    fn int_rank_is_too_big() {
        assert_eq!(
            zero_to_99().percentile(150),
            Err(StatsError::Range(RangeError::Percent(150)))
        );
    }

    #[test]
    fn rank_kind_selects_range() {
        let stats = zero_to_99();
        assert_eq!(stats.percentile(50), stats.percentile(0.5));
        assert_eq!(stats.percentile(Rank::Percent(1)), Ok(0.99));
        assert!(stats.percentile(50.0).is_err());
        assert!(stats.percentile(Rank::Fraction(1.5)).is_err());
    }

    #[test]
    fn extremes() {
        let stats = stats_of(&DRAWS_1_1000);
        assert_eq!(stats.percentile(0), Ok(6.0));
        assert_eq!(stats.percentile(100), Ok(990.0));
        assert_eq!(stats.percentile(0.0), Ok(6.0));
        assert_eq!(stats.percentile(1.0), Ok(990.0));
    }

    #[test]
    fn monotonic_in_rank() {
        let stats = stats_of(&DRAWS_1_1000);
        let mut previous = f64::NEG_INFINITY;
        for rank in 0..=100 {
            let value = stats.percentile(rank).unwrap();
            assert!(
                value >= previous,
                "percentile({}) = {} dropped below {}",
                rank,
                value,
                previous
            );
            previous = value;
        }
    }

    #[test]
    fn free_function_matches_engine() {
        let stats = stats_of(&DRAWS_1_1000);
        let values = as_f64(&DRAWS_1_1000);
        for rank in [0, 10, 25, 50, 75, 99, 100] {
            assert_eq!(percentile(&values, rank), stats.percentile(rank));
        }
    }
}

// ============================================================================
// Quartiles
// ============================================================================

mod quartiles {
    use super::*;

    #[test]
    fn q1_odd() {
        let values = as_f64(&DRAWS_1_100[..35]);
        assert_eq!(quantile(&values, Quartile::Lower), Ok(12.0));
    }

    #[test]
    fn q2_odd() {
        let values = as_f64(&DRAWS_1_100[..35]);
        assert_eq!(quantile(&values, Quartile::Median), Ok(45.0));
    }

    #[test]
    fn q3_odd() {
        let values = as_f64(&DRAWS_1_100[..35]);
        assert_eq!(quantile(&values, Quartile::Upper), Ok(77.0));
    }

    #[test]
    fn q1_even() {
        let values = as_f64(&DRAWS_1_100);
        assert_eq!(quantile(&values, Quartile::Lower), Ok(12.0));
    }

    #[test]
    fn q2_even() {
        let values = as_f64(&DRAWS_1_100);
        assert_eq!(quantile(&values, Quartile::Median), Ok(44.0));
    }

    #[test]
    fn q3_even() {
        let values = as_f64(&DRAWS_1_100);
        assert_eq!(quantile(&values, Quartile::Upper), Ok(72.0));
    }

    #[test]
    fn empty_values() {
        assert_eq!(quantile(&[], Quartile::Lower), Err(StatsError::EmptyDataset));
    }

    #[test]
    fn only_one_value() {
        let stats = stats_of(&[42]);
        assert_eq!(stats.quantile(Quartile::Lower), Ok(42.0));
        assert_eq!(quantile(&[42.0], Quartile::from_selector(1)), Ok(42.0));
    }

    #[test]
    fn engine_matches_free_function() {
        let stats = stats_of(&DRAWS_1_100);
        let values = as_f64(&DRAWS_1_100);
        for which in [Quartile::Lower, Quartile::Median, Quartile::Upper] {
            assert_eq!(stats.quantile(which), quantile(&values, which));
        }
    }
}

// ============================================================================
// Invariants
// ============================================================================

mod invariants {
    use super::*;

    fn datasets() -> Vec<Vec<i64>> {
        vec![
            vec![7],
            vec![3, 3, 3],
            vec![-5, 10],
            DRAWS_1_100[..35].to_vec(),
            DRAWS_1_100.to_vec(),
            DRAWS_1_1000.to_vec(),
        ]
    }

    #[test]
    fn mean_between_min_and_max() {
        for data in datasets() {
            let summary = stats_of(&data).compute().unwrap();
            let min = summary["min"].as_f64();
            let mean = summary["mean"].as_f64();
            let max = summary["max"].as_f64();
            assert!(min <= mean && mean <= max, "{} <= {} <= {}", min, mean, max);
        }
    }

    #[test]
    fn count_matches_successful_updates() {
        let mut stats = Statistics::new();
        let mut accepted = 0;
        for (i, &v) in DRAWS_1_100.iter().enumerate() {
            if i % 10 == 0 {
                assert!(stats.update("skip").is_err());
            }
            stats.update(v).unwrap();
            accepted += 1;
        }
        let summary = stats.compute().unwrap();
        assert_eq!(summary["count"], Value::Int(accepted));
    }

    #[test]
    fn compute_is_idempotent() {
        for data in datasets() {
            let stats = stats_of(&data);
            assert_eq!(stats.compute(), stats.compute());
        }
    }

    #[test]
    fn insertion_order_is_irrelevant() {
        let forward = stats_of(&DRAWS_1_100).compute().unwrap();

        let mut reversed = DRAWS_1_100;
        reversed.reverse();
        let backward = stats_of(&reversed).compute().unwrap();

        for (key, value) in forward.iter() {
            if key == "stddev" {
                // residual summation order may differ in the last ulp
                assert_close(value.as_f64(), backward[key].as_f64(), 1e-6);
            } else {
                assert_eq!(*value, backward[key], "{}", key);
            }
        }
    }

    #[test]
    fn empty_dataset_fails_everywhere() {
        let stats = Statistics::new();
        assert_eq!(stats.compute(), Err(StatsError::EmptyDataset));
        assert_eq!(stats.percentile(50), Err(StatsError::EmptyDataset));
        assert_eq!(stats.quantile(Quartile::Median), Err(StatsError::EmptyDataset));
    }

    #[test]
    fn iqr_uses_rounded_quartiles() {
        for data in datasets() {
            let summary = stats_of(&data).compute().unwrap();
            let q1 = summary["q1"].as_f64();
            let q3 = summary["q3"].as_f64();
            assert_eq!(summary["iqr"].as_f64(), q3 - q1);
        }
    }
}
