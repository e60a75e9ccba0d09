//! # Uniformity Flows
//!
//! Statistical checks across crate boundaries: both Fisher-Yates forms
//! should hit every permutation equally often, results must not depend on
//! the rayon pool size, and the classic "swap with any index" shuffle must
//! be flagged as biased by the same histogram.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use fd_shuffle::domain::{analyze, factorial, PermutationHistogram};
    use fd_shuffle::{
        AnalysisConfig, OsRandomSource, RandomSource, SeededRandomSource, ShuffleApi,
        ShuffleConfigBuilder, ShuffleService, ShuffleVariant,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn service(variant: ShuffleVariant) -> ShuffleService<OsRandomSource> {
        let config = ShuffleConfigBuilder::new().variant(variant).build().unwrap();
        ShuffleService::with_config(Arc::new(OsRandomSource::new()), config)
    }

    /// Every position swaps with any index in `[0, n)`; n^n outcomes over n!
    /// permutations, so some permutations come up more often.
    fn naive_shuffle<R: RandomSource>(items: &mut [usize], rng: &R) {
        let n = items.len();
        for i in 0..n {
            let j = rng.random_usize(n);
            items.swap(i, j);
        }
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_both_variants_are_uniform_over_four_items() {
        for variant in [ShuffleVariant::Durstenfeld, ShuffleVariant::InsideOut] {
            let analysis = AnalysisConfig {
                items: 4,
                trials: 240_000,
                tolerance: 0.06,
                ..Default::default()
            };
            let report = service(variant).analyze_uniformity(&analysis).unwrap();

            assert_eq!(report.permutations, 24);
            assert_eq!(report.counts.iter().sum::<u64>(), 240_000);
            assert!(
                report.is_within(analysis.tolerance),
                "{variant}: max deviation {}",
                report.max_relative_deviation
            );
            // 23 degrees of freedom; p < 1e-4 above ~55
            assert!(report.chi_square < 60.0, "{variant}: chi-square {}", report.chi_square);
        }
    }

    #[test]
    fn test_small_sequences() {
        for items in 1..=2 {
            let analysis = AnalysisConfig {
                items,
                trials: 10_000,
                tolerance: 0.1,
                ..Default::default()
            };
            let report = service(ShuffleVariant::Durstenfeld)
                .analyze_uniformity(&analysis)
                .unwrap();
            assert_eq!(report.permutations, factorial(items));
            assert!(report.is_within(analysis.tolerance));
        }
    }

    #[test]
    fn test_result_does_not_depend_on_pool_size() {
        let run = |threads: usize| {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap();
            pool.install(|| {
                analyze(ShuffleVariant::InsideOut, 4, 20_000, 8, 99, SeededRandomSource::new)
                    .unwrap()
            })
        };

        let single = run(1);
        let multi = run(4);
        assert_eq!(single, multi);
    }

    #[test]
    fn test_naive_shuffle_is_detected() {
        let rng = SeededRandomSource::new(2024);
        let mut histogram = PermutationHistogram::new(3).unwrap();
        let mut perm = Vec::with_capacity(3);
        for _ in 0..60_000 {
            perm.clear();
            perm.extend(0..3);
            naive_shuffle(&mut perm, &rng);
            histogram.record(&perm);
        }

        let report = histogram.report();
        // 27 outcomes over 6 permutations: counts sit at 4/27 or 5/27 of
        // the trials, about 11% off the uniform 1/6.
        assert!(!report.is_within(0.05), "deviation {}", report.max_relative_deviation);
        assert!(report.chi_square > 100.0);

        let fair = service(ShuffleVariant::Durstenfeld)
            .analyze_uniformity(&AnalysisConfig {
                trials: 60_000,
                ..Default::default()
            })
            .unwrap();
        assert!(fair.chi_square < report.chi_square);
    }
}
