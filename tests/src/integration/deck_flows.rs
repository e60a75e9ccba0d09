//! # Deck Shuffle Flows
//!
//! Exercises `ShuffleService` through the `ShuffleApi` port with the
//! different random source adapters, including one defined outside the
//! library to check that the port is pluggable.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use fd_shuffle::{
        Deck, FixedRandomSource, RandomSource, ScriptedRandomSource, SeededRandomSource,
        ShuffleApi, ShuffleConfigBuilder, ShuffleError, ShuffleService, ShuffleVariant,
    };
    use rand::Rng;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Adapter over the thread-local generator from `rand`
    struct ThreadRngSource;

    impl RandomSource for ThreadRngSource {
        fn random_usize(&self, bound: usize) -> usize {
            rand::thread_rng().gen_range(0..bound)
        }
    }

    fn service_with<R: RandomSource>(rng: R, variant: ShuffleVariant) -> ShuffleService<R> {
        let config = ShuffleConfigBuilder::new().variant(variant).build().unwrap();
        ShuffleService::with_config(Arc::new(rng), config)
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_golden_four_card_shuffle_both_variants() {
        let mut deck = Deck::with_size(4).unwrap();
        service_with(ScriptedRandomSource::new(vec![0, 0, 0]), ShuffleVariant::Durstenfeld)
            .shuffle_deck(&mut deck)
            .unwrap();
        assert_eq!(deck.to_string(), "[1, 2, 3, 0]");

        let mut deck = Deck::with_size(4).unwrap();
        service_with(ScriptedRandomSource::new(vec![0, 0, 0]), ShuffleVariant::InsideOut)
            .shuffle_deck(&mut deck)
            .unwrap();
        assert_eq!(deck.to_string(), "[3, 0, 1, 2]");
    }

    #[test]
    fn test_external_adapter_deals_valid_deck() {
        let service = service_with(ThreadRngSource, ShuffleVariant::Durstenfeld);
        for _ in 0..50 {
            let (deck, outcome) = service.deal().unwrap();
            assert!(deck.is_permutation_of(&Deck::standard()));
            assert_eq!(outcome.draws, 51);
        }
        assert_eq!(service.metrics().snapshot().shuffles_performed, 50);
    }

    #[test]
    fn test_reshuffling_keeps_the_same_cards() {
        let service = service_with(SeededRandomSource::new(8), ShuffleVariant::InsideOut);
        let mut deck = Deck::standard();
        for _ in 0..100 {
            service.shuffle_deck(&mut deck).unwrap();
        }
        assert!(deck.is_permutation_of(&Deck::standard()));
    }

    #[test]
    fn test_shared_source_across_threads() {
        let rng = Arc::new(SeededRandomSource::new(21));
        let service = Arc::new(ShuffleService::new(rng));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    let mut deck = Deck::standard();
                    for _ in 0..25 {
                        service.shuffle_deck(&mut deck).unwrap();
                    }
                    deck
                })
            })
            .collect();

        for handle in handles {
            let deck = handle.join().unwrap();
            assert!(deck.is_permutation_of(&Deck::standard()));
        }
        let snap = service.metrics().snapshot();
        assert_eq!(snap.shuffles_performed, 100);
        assert_eq!(snap.draws_consumed, 100 * 51);
    }

    #[test]
    fn test_fixed_source_is_deterministic_but_not_identity() {
        let service = service_with(FixedRandomSource::first(), ShuffleVariant::Durstenfeld);
        let (a, _) = service.deal().unwrap();
        let (b, _) = service.deal().unwrap();
        assert_eq!(a, b);
        assert!(!a.is_sorted());
    }

    #[test]
    fn test_misbehaving_source_is_rejected() {
        let service = service_with(FixedRandomSource::new(0), ShuffleVariant::Durstenfeld);
        let broken = service_with(ScriptedRandomSource::new(vec![1_000]), ShuffleVariant::InsideOut);

        let original = Deck::standard();
        assert!(service.shuffled(&original).is_ok());

        let result = broken.shuffled(&original);
        assert!(matches!(
            result,
            Err(ShuffleError::DrawOutOfRange { drawn: 1_000, bound: 2 })
        ));
        assert_eq!(broken.metrics().snapshot().contract_violations, 1);
    }
}
