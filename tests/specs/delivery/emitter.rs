//! Emitter and scope specs.
//!
//! Verify which parameters observers receive for plain, appending and
//! replacing emits, and that scopes never leak state between calls.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn interaction_carries_scope_parameters() {
    let (registry, fake) = registry_with_fake();
    let scope = Scope::new(registry).with(SourceKey, Some(Source::ContactList));

    scope.emitter().interaction(&Interaction::new("submit"));

    let call = fake.last().unwrap();
    assert_eq!(call.kind, "interaction");
    assert_eq!(call.name, "submit");
    assert_eq!(call.params(), params(&[("source", "contact-list")]));
}

#[test]
fn view_without_parameters_delivers_empty_set() {
    let (registry, fake) = registry_with_fake();

    Scope::new(registry).emitter().view(&View::new("contact-list"));

    let call = fake.last().unwrap();
    assert_eq!(call.kind, "view");
    assert_eq!(call.name, "contact-list");
    assert_eq!(call.params(), BTreeMap::new());
}

#[test]
fn replacing_with_empty_ignores_snapshot() {
    let (registry, fake) = registry_with_fake();
    let emitter = Scope::new(registry)
        .with(SourceKey, Some(Source::Settings))
        .emitter();

    emitter.emit_replacing(&View::new("home"), &ParameterStore::new());

    assert_eq!(fake.last().unwrap().params(), BTreeMap::new());
    assert_eq!(emitter.snapshot().describe(), "source: settings");
}

#[test]
fn appending_twice_does_not_leak() {
    let (registry, fake) = registry_with_fake();
    let emitter = Scope::new(registry)
        .with(SourceKey, Some(Source::ContactList))
        .emitter();

    let first = ParameterStore::new().with(ComponentKey, Some("button".into()));
    emitter.emit_appending(&Interaction::new("tap"), &first);
    emitter.emit_appending(&Interaction::new("tap"), &ParameterStore::new());

    let calls = fake.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0].params(),
        params(&[("component", "button"), ("source", "contact-list")])
    );
    assert_eq!(calls[1].params(), params(&[("source", "contact-list")]));
}

#[test]
fn nested_scope_overrides_parent_for_its_emitters_only() {
    let (registry, fake) = registry_with_fake();
    let parent = Scope::new(registry).with(SourceKey, Some(Source::ContactList));
    let child = parent.with(SourceKey, Some(Source::Settings));

    child.emitter().view(&View::new("detail"));
    parent.emitter().view(&View::new("list"));

    let calls = fake.calls();
    assert_eq!(calls[0].params(), params(&[("source", "settings")]));
    assert_eq!(calls[1].params(), params(&[("source", "contact-list")]));
}

#[test]
fn view_and_interaction_with_same_name_stay_distinct() {
    let (registry, fake) = registry_with_fake();
    let emitter = Emitter::new(registry, ParameterStore::new());

    emitter.view(&View::new("contact-list"));
    emitter.interaction(&Interaction::new("contact-list"));

    let kinds: Vec<&str> = fake.calls().iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec!["view", "interaction"]);
}
