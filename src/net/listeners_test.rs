use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

fn counter(registry: &ListenerRegistry) -> (Rc<Cell<u32>>, Subscription) {
    let hits = Rc::new(Cell::new(0));
    let seen = Rc::clone(&hits);
    let sub = registry.register(move |_, _| seen.set(seen.get() + 1));
    (hits, sub)
}

#[test]
fn emit_invokes_each_listener_once() {
    let registry = ListenerRegistry::new();
    let (a, _sub_a) = counter(&registry);
    let (b, _sub_b) = counter(&registry);

    registry.emit(AuthEvent::SignedOut, None);

    assert_eq!(a.get(), 1);
    assert_eq!(b.get(), 1);
}

#[test]
fn emit_passes_event_kind_and_payload() {
    let registry = ListenerRegistry::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = registry.register(move |event, session| sink.borrow_mut().push((event, session.is_some())));

    registry.emit(AuthEvent::SignedOut, None);

    assert_eq!(*seen.borrow(), vec![(AuthEvent::SignedOut, false)]);
}

#[test]
fn unsubscribe_stops_delivery() {
    let registry = ListenerRegistry::new();
    let (hits, sub) = counter(&registry);

    sub.unsubscribe();
    registry.emit(AuthEvent::SignedOut, None);

    assert_eq!(hits.get(), 0);
    assert!(registry.is_empty());
}

#[test]
fn dropping_subscription_releases_listener() {
    let registry = ListenerRegistry::new();
    let (hits, sub) = counter(&registry);
    assert_eq!(registry.len(), 1);

    drop(sub);
    registry.emit(AuthEvent::SignedOut, None);

    assert_eq!(hits.get(), 0);
    assert_eq!(registry.len(), 0);
}

#[test]
fn subscription_reports_activity() {
    let registry = ListenerRegistry::new();
    let (_hits, sub) = counter(&registry);
    assert!(sub.is_active());
    drop(registry);
    assert!(!sub.is_active());
}

#[test]
fn subscription_outliving_registry_drops_cleanly() {
    let registry = ListenerRegistry::new();
    let (_hits, sub) = counter(&registry);
    drop(registry);
    sub.unsubscribe();
}

#[test]
fn listener_released_mid_emit_is_skipped() {
    let registry = ListenerRegistry::new();
    let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    let slot = Rc::clone(&victim);
    let _killer = registry.register(move |_, _| {
        slot.borrow_mut().take();
    });
    let (victim_hits, victim_sub) = counter(&registry);
    *victim.borrow_mut() = Some(victim_sub);

    registry.emit(AuthEvent::SignedOut, None);

    assert_eq!(victim_hits.get(), 0);
    assert_eq!(registry.len(), 1);
}

#[test]
fn listener_may_register_during_emit() {
    let registry = ListenerRegistry::new();
    let late: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

    let reg = registry.clone();
    let store = Rc::clone(&late);
    let _sub = registry.register(move |_, _| {
        store.borrow_mut().push(reg.register(|_, _| {}));
    });

    registry.emit(AuthEvent::SignedIn, None);

    assert_eq!(registry.len(), 2);
}
