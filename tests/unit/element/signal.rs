//! Tests for listener registration and notification

#[cfg(test)]
mod tests {
    use gridstash::element::{Signal, UpdateSignal};
    use std::cell::RefCell;
    use std::rc::Rc;

    // Tests that listeners run in subscription order with the emitted value
    // Verified by storing listeners in a HashMap
    #[test]
    fn test_emit_in_subscription_order() {
        let signal: Signal<u32> = Signal::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            signal.subscribe(move |value: &u32| log.borrow_mut().push(format!("{tag}:{value}")));
        }

        assert_eq!(signal.emit(&7), 3);
        assert_eq!(
            *log.borrow(),
            vec!["first:7".to_string(), "second:7".to_string(), "third:7".to_string()]
        );
    }

    #[test]
    fn test_unsubscribe_removes_only_that_listener() {
        let signal = UpdateSignal::new();
        let first = signal.subscribe(|_| {});
        let second = signal.subscribe(|_| {});

        assert!(signal.unsubscribe(first));
        assert!(!signal.unsubscribe(first));
        assert_eq!(signal.listener_count(), 1);
        assert_eq!(signal.emit(&()), 1);
        assert!(signal.unsubscribe(second));
        assert_eq!(signal.emit(&()), 0);
    }

    // Tests that a listener may unsubscribe itself while being notified
    // Verified by iterating the live listener map during emit
    #[test]
    fn test_listener_can_unsubscribe_during_emit() {
        let signal = Rc::new(UpdateSignal::new());
        let own_id = Rc::new(RefCell::new(None));

        let listener_signal = Rc::clone(&signal);
        let listener_id = Rc::clone(&own_id);
        let id = signal.subscribe(move |_| {
            if let Some(id) = listener_id.borrow_mut().take() {
                listener_signal.unsubscribe(id);
            }
        });
        *own_id.borrow_mut() = Some(id);

        assert_eq!(signal.emit(&()), 1);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn test_debug_shows_listener_count() {
        let signal = UpdateSignal::default();
        signal.subscribe(|_| {});

        assert_eq!(format!("{signal:?}"), "Signal { listeners: 1 }");
    }
}
