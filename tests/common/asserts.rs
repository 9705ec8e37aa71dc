use cors_override_rs::{Header, Verdict};

pub fn assert_rewrite(verdict: Verdict) -> Vec<Header> {
    match verdict {
        Verdict::Rewrite(headers) => headers,
        other => panic!("expected rewrite verdict, got {:?}", other),
    }
}

pub fn assert_pass(verdict: &Verdict) {
    assert!(
        matches!(verdict, Verdict::Pass),
        "expected pass verdict, got {:?}",
        verdict
    );
}

pub fn assert_cancel(verdict: &Verdict) {
    assert!(
        matches!(verdict, Verdict::Cancel),
        "expected cancel verdict, got {:?}",
        verdict
    );
}
