use super::*;
use crate::rules::{OriginPolicy, RuleEntry};

fn record(origin: &str) -> ExchangeRecord {
    ExchangeRecord::new(
        RuleEntry {
            origin: Some(OriginPolicy::Allow),
            ..RuleEntry::default()
        },
        origin.to_string(),
    )
}

mod preflights {
    use super::*;

    #[test]
    fn should_keep_record_when_peeked_then_allow_later_take() {
        let correlator = ExchangeCorrelator::new();
        correlator.insert_preflight("k".into(), record("https://a.test"));

        assert!(correlator.peek_preflight("k").is_some());
        assert!(correlator.peek_preflight("k").is_some());
        assert!(correlator.take_preflight("k").is_some());
        assert!(correlator.peek_preflight("k").is_none());
    }

    #[test]
    fn should_return_none_when_key_unknown_then_treat_as_untracked() {
        let correlator = ExchangeCorrelator::new();

        assert!(correlator.peek_preflight("missing").is_none());
        assert!(correlator.take_preflight("missing").is_none());
    }

    #[test]
    fn should_carry_omitted_headers_when_record_is_taken_then_preserve_state() {
        let correlator = ExchangeCorrelator::new();
        let mut stored = record("https://a.test");
        stored.acrh_omitted = Some(vec!["x-bar".to_string()]);
        correlator.insert_preflight("k".into(), stored.clone());

        assert_eq!(correlator.take_preflight("k"), Some(stored));
    }
}

mod requests {
    use super::*;

    #[test]
    fn should_consume_record_when_response_arrives_then_forget_exchange() {
        let correlator = ExchangeCorrelator::new();
        correlator.insert_request("42".into(), record("https://a.test"));

        assert!(correlator.take_request("42").is_some());
        assert!(correlator.take_request("42").is_none());
    }
}

mod eviction {
    use super::*;

    #[test]
    fn should_evict_oldest_record_when_capacity_reached_then_keep_newest() {
        let correlator = ExchangeCorrelator::new();
        for index in 0..=MAX_PENDING_PREFLIGHTS {
            correlator.insert_preflight(format!("k{index}"), record("https://a.test"));
        }

        let (pending, _) = correlator.pending_counts();
        assert_eq!(pending, MAX_PENDING_PREFLIGHTS);
        assert!(correlator.peek_preflight("k0").is_none());
        assert!(correlator.peek_preflight(&format!("k{MAX_PENDING_PREFLIGHTS}")).is_some());
    }

    #[test]
    fn should_replace_record_when_key_reused_then_not_grow_table() {
        let correlator = ExchangeCorrelator::new();
        correlator.insert_preflight("k".into(), record("https://a.test"));
        correlator.insert_preflight("k".into(), record("https://b.test"));

        let (pending, _) = correlator.pending_counts();
        assert_eq!(pending, 1);
        assert_eq!(
            correlator.peek_preflight("k").map(|r| r.origin),
            Some("https://b.test".to_string())
        );
    }
}
