//! Unit tests for SignalRepository - the in-memory signal set holder.

#[cfg(test)]
mod repository_tests {
    use crate::signals::record::{Direction, SignalRecord};
    use crate::signals::repository::SignalRepository;

    fn record(symbol: &str, direction: Direction, entry_time: &str) -> SignalRecord {
        SignalRecord {
            symbol: symbol.to_string(),
            direction,
            entry_price: Some(100.0),
            entry_at: SignalRecord::parse_entry_time(entry_time),
            entry_time: entry_time.to_string(),
            target_price: Some(110.0),
            target_exit_time: "2024-01-02 00:00:00".to_string(),
            status: "OPEN".to_string(),
            quality_score: Some(95.0),
            signal_class: "Sinais Premium".to_string(),
            strategy_info: "trend-follow".to_string(),
        }
    }

    #[test]
    fn test_empty_before_first_replace() {
        let repo = SignalRepository::new();

        assert!(repo.current().is_empty());
        assert_eq!(repo.total_count(), 0);
        assert_eq!(repo.count_by_direction(Direction::Long), 0);
        assert_eq!(repo.count_by_direction(Direction::Short), 0);
    }

    #[test]
    fn test_replace_then_current_round_trips() {
        let repo = SignalRepository::new();
        repo.replace(vec![
            record("BTCUSDT", Direction::Long, "2024-01-01 10:00:00"),
            record("ETHUSDT", Direction::Short, "2024-01-01 09:00:00"),
        ]);

        let held = repo.current();
        assert_eq!(held.len(), 2);
        // Same records, same order, no mutation
        assert_eq!(held[0].symbol, "BTCUSDT");
        assert_eq!(held[1].symbol, "ETHUSDT");
        assert_eq!(held[0].entry_price, Some(100.0));
    }

    #[test]
    fn test_counts_by_direction() {
        let repo = SignalRepository::new();
        repo.replace(vec![
            record("A", Direction::Long, "2024-01-01 10:00:00"),
            record("B", Direction::Short, "2024-01-01 09:00:00"),
            record("C", Direction::Long, "2024-01-01 08:00:00"),
        ]);

        assert_eq!(repo.count_by_direction(Direction::Long), 2);
        assert_eq!(repo.count_by_direction(Direction::Short), 1);
        assert_eq!(repo.total_count(), 3);
    }

    #[test]
    fn test_replace_swaps_entire_set() {
        let repo = SignalRepository::new();
        repo.replace(vec![
            record("A", Direction::Long, "2024-01-01 10:00:00"),
            record("B", Direction::Short, "2024-01-01 09:00:00"),
        ]);
        repo.replace(vec![record("C", Direction::Short, "2024-01-01 11:00:00")]);

        let held = repo.current();
        assert_eq!(held.len(), 1);
        assert_eq!(held[0].symbol, "C");
        assert_eq!(repo.count_by_direction(Direction::Long), 0);
    }

    #[test]
    fn test_clones_share_the_same_set() {
        let repo = SignalRepository::new();
        let reader = repo.clone();

        repo.replace(vec![record("A", Direction::Long, "2024-01-01 10:00:00")]);

        assert_eq!(reader.total_count(), 1);
        assert_eq!(reader.current()[0].symbol, "A");
    }

    #[test]
    fn test_concurrent_replace_never_exposes_partial_set() {
        use std::sync::Arc;
        use std::thread;

        let repo = Arc::new(SignalRepository::new());
        let set_size = 50;

        let writer = {
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                for i in 0..100 {
                    let records: Vec<SignalRecord> = (0..set_size)
                        .map(|n| {
                            record(
                                &format!("SYM{}-{}", i, n),
                                Direction::Long,
                                "2024-01-01 10:00:00",
                            )
                        })
                        .collect();
                    repo.replace(records);
                }
            })
        };

        let mut readers = vec![];
        for _ in 0..4 {
            let repo = Arc::clone(&repo);
            readers.push(thread::spawn(move || {
                for _ in 0..100 {
                    let len = repo.current().len();
                    assert!(len == 0 || len == set_size);
                }
            }));
        }

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
