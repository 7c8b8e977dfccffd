// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use gw_adapters::{FakeFeeSource, FakeQuote, FakeSink};
use gw_core::FakeClock;

fn sampler(
    source: FakeFeeSource,
    sink: Option<FakeSink>,
) -> (Sampler<FakeFeeSource, FakeSink, FakeClock>, FakeClock) {
    let clock = FakeClock::new();
    let sampler = Sampler::new(
        source,
        sink,
        clock.clone(),
        RetryPolicy::default(),
        CancelToken::new(),
    );
    (sampler, clock)
}

#[test]
fn success_on_first_attempt_does_not_wait() {
    let (mut sampler, clock) = sampler(FakeFeeSource::with_fees(&[14.0]), None);

    let reading = sampler.fetch().unwrap();

    assert_eq!(reading.suggested_max_fee(), 14.0);
    assert!(clock.sleeps().is_empty());
    assert_eq!(sampler.stats().attempts, 1);
    assert_eq!(sampler.stats().readings, 1);
}

#[test]
fn sustained_transient_failure_backs_off_then_gives_up() {
    let source = FakeFeeSource::default();
    let (mut sampler, clock) = sampler(source.clone(), None);

    assert!(sampler.fetch().is_none());

    assert_eq!(source.calls(), 4);
    assert_eq!(
        clock.sleeps(),
        vec![
            Duration::from_secs(1),
            Duration::from_secs(2),
            Duration::from_secs(4)
        ]
    );
    let stats = sampler.stats();
    assert_eq!(stats.transient_failures, 4);
    assert_eq!(stats.exhausted, 1);
    assert_eq!(stats.readings, 0);
}

#[test]
fn recovers_after_transient_failures() {
    let source = FakeFeeSource::new([FakeQuote::Transient, FakeQuote::Transient, FakeQuote::Fee(9.5)]);
    let (mut sampler, clock) = sampler(source.clone(), None);

    let reading = sampler.fetch().unwrap();

    assert_eq!(reading.suggested_max_fee(), 9.5);
    assert_eq!(source.calls(), 3);
    assert_eq!(clock.sleeps(), vec![Duration::from_secs(1), Duration::from_secs(2)]);
}

#[test]
fn data_shape_failure_aborts_without_retry() {
    let source = FakeFeeSource::new([FakeQuote::Malformed, FakeQuote::Fee(1.0)]);
    let (mut sampler, clock) = sampler(source.clone(), None);

    assert!(sampler.fetch().is_none());

    assert_eq!(source.calls(), 1);
    assert!(clock.sleeps().is_empty());
    assert_eq!(sampler.stats().data_shape_failures, 1);
    assert_eq!(sampler.stats().exhausted, 0);
}

#[test]
fn data_shape_after_transient_stops_remaining_budget() {
    let source = FakeFeeSource::new([FakeQuote::Transient, FakeQuote::Malformed]);
    let (mut sampler, clock) = sampler(source.clone(), None);

    assert!(sampler.fetch().is_none());

    assert_eq!(source.calls(), 2);
    assert_eq!(clock.sleeps(), vec![Duration::from_secs(1)]);
}

#[test]
fn successful_reading_is_forwarded_to_sink() {
    let sink = FakeSink::new();
    let (mut sampler, _) = sampler(FakeFeeSource::with_fees(&[7.0]), Some(sink.clone()));

    let reading = sampler.fetch().unwrap();

    assert_eq!(sink.writes(), vec![reading]);
}

#[test]
fn sink_failure_does_not_fail_fetch() {
    let sink = FakeSink::failing();
    let (mut sampler, _) = sampler(FakeFeeSource::with_fees(&[7.0]), Some(sink.clone()));

    assert!(sampler.fetch().is_some());
    assert_eq!(sampler.stats().sink_failures, 1);
}

#[test]
fn failed_fetch_writes_nothing_to_sink() {
    let sink = FakeSink::new();
    let (mut sampler, _) = sampler(FakeFeeSource::new([FakeQuote::Malformed]), Some(sink.clone()));

    assert!(sampler.fetch().is_none());
    assert!(sink.calls().is_empty());
}

#[test]
fn cancellation_during_backoff_returns_none() {
    let cancel = CancelToken::new();
    let source = FakeFeeSource::default().cancel_after(1, cancel.clone());
    let clock = FakeClock::new();
    let mut sampler: Sampler<_, FakeSink, _> =
        Sampler::new(source.clone(), None, clock.clone(), RetryPolicy::default(), cancel);

    assert!(sampler.fetch().is_none());

    assert_eq!(source.calls(), 1);
    assert!(clock.sleeps().is_empty());
}

#[test]
fn export_batch_failure_is_counted() {
    let sink = FakeSink::failing();
    let (mut sampler, _) = sampler(FakeFeeSource::default(), Some(sink.clone()));

    sampler.export_batch(&SampleSet::new());

    assert_eq!(sink.exports().len(), 1);
    assert_eq!(sampler.stats().sink_failures, 1);
}
