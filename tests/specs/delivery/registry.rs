//! Observer registry specs.
//!
//! Verify fan-out order, idempotent registration, weak ownership and
//! isolation of failing backends.

use crate::prelude::*;
use evtag_adapters::{NoOpObserver, TracedObserver};
use evtag_core::ObserverError;
use similar_asserts::assert_eq;

#[test]
fn two_observers_receive_identical_events_in_order() {
    let registry = ObserverRegistry::new();
    let first = Arc::new(FakeObserver::new());
    let second = Arc::new(FakeObserver::new());
    let first_id = registry.register(&first);
    let second_id = registry.register(&second);

    let emitter = Scope::new(registry.clone())
        .with(SourceKey, Some(Source::ContactList))
        .emitter();
    let delivery = emitter.interaction(&Interaction::new("submit"));

    assert_eq!(delivery.delivered, 2);
    assert_eq!(registry.observer_ids(), vec![first_id, second_id]);
    assert_eq!(first.calls(), second.calls());
    assert_eq!(first.calls().len(), 1);
}

#[test]
fn duplicate_registration_delivers_once() {
    let (registry, fake) = registry_with_fake();
    registry.register(&fake);

    Emitter::new(registry, ParameterStore::new()).view(&View::new("home"));

    assert_eq!(fake.calls().len(), 1);
}

#[test]
fn unregistered_observer_stops_receiving() {
    let (registry, fake) = registry_with_fake();
    let emitter = Emitter::new(registry.clone(), ParameterStore::new());

    emitter.view(&View::new("one"));
    assert!(registry.unregister(&fake));
    emitter.view(&View::new("two"));

    let names: Vec<String> = fake.calls().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["one".to_string()]);
}

#[test]
fn unregistering_a_stranger_is_harmless() {
    let (registry, _fake) = registry_with_fake();
    let stranger = Arc::new(NoOpObserver::new());

    assert!(!registry.unregister(&stranger));
    assert_eq!(registry.observer_count(), 1);
}

#[test]
fn dropped_observers_are_released() {
    let registry = ObserverRegistry::new();
    let emitter = Emitter::new(registry.clone(), ParameterStore::new());

    for _ in 0..500 {
        let transient = Arc::new(FakeObserver::new());
        registry.register(&transient);
    }
    let delivery = emitter.view(&View::new("home"));

    assert_eq!(delivery.attempted(), 0);
    assert_eq!(registry.entry_count(), 0);
}

#[test]
fn failing_backend_does_not_silence_others() {
    let registry = ObserverRegistry::new();
    let broken = Arc::new(FakeObserver::new());
    broken.fail_with("quota exceeded");
    let healthy = Arc::new(TracedObserver::new(FakeObserver::new()));
    registry.register(&broken);
    registry.register(&healthy);

    let delivery = Emitter::new(registry, ParameterStore::new()).action(&Action::signin());

    assert_eq!(delivery.delivered, 1);
    assert_eq!(delivery.failures.len(), 1);
    assert_eq!(delivery.failures[0].observer, "fake".to_string());
    assert_eq!(
        delivery.failures[0].error,
        ObserverError::Failed("quota exceeded".into())
    );
    assert_eq!(healthy.inner().calls().len(), 1);
}

#[test]
fn global_registry_is_shared() {
    let observer = Arc::new(FakeObserver::new());
    ObserverRegistry::global().register(&observer);

    let delivery = Emitter::new(ObserverRegistry::global().clone(), ParameterStore::new())
        .action(&Action::terms_accepted());

    assert!(delivery.delivered >= 1);
    assert_eq!(observer.last().unwrap().name, "terms_accepted");
    assert!(ObserverRegistry::global().unregister(&observer));
}
