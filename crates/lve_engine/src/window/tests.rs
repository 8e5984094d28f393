//! Window lifecycle scenarios, driven by the headless backend

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use super::*;
use crate::config::WindowConfig;
use crate::foundation::logging;

fn open(width: u32, height: u32, title: &str) -> (Window<HeadlessBackend>, Rc<HeadlessProbe>) {
    logging::init_for_tests();
    let window = Window::<HeadlessBackend>::create(width, height, title).unwrap();
    let probe = window.subsystem().backend().probe();
    (window, probe)
}

fn failing_subsystem(options: HeadlessOptions) -> (Subsystem<HeadlessBackend>, Rc<HeadlessProbe>) {
    let backend = HeadlessBackend::with_options(options).unwrap();
    let probe = backend.probe();
    (Subsystem::adopt(backend), probe)
}

thread_local! {
    static REFUSED_CREATE_CALLS: Cell<u32> = const { Cell::new(0) };
}

/// Backend whose library never initializes
struct RefusingBackend;

impl WindowBackend for RefusingBackend {
    type Window = HeadlessWindow;

    const NAME: &'static str = "refusing";

    fn init() -> WindowResult<Self> {
        Err(WindowError::InitializationFailed {
            backend: Self::NAME,
            reason: "no display".to_string(),
        })
    }

    fn create_window(&mut self, descriptor: &WindowDescriptor<'_>) -> WindowResult<HeadlessWindow> {
        REFUSED_CREATE_CALLS.with(|calls| calls.set(calls.get() + 1));
        Err(descriptor.creation_failed())
    }

    fn poll_events(&mut self) {}
}

#[test]
fn test_hello_vulkan_window() {
    let (window, probe) = open(800, 600, "Hello Vulkan!");

    assert!(probe.window_live());
    assert!(!window.should_close());
    assert_eq!(window.extent(), (800, 600));
    assert_eq!(window.native_size(), (800, 600));
    assert_eq!(window.title(), "Hello Vulkan!");
}

#[test]
fn test_created_as_fixed_size_presentation_surface() {
    let (_window, probe) = open(640, 480, "Hints");

    let hints = probe.last_hints().unwrap();
    assert!(!hints.client_api);
    assert!(!hints.resizable);
}

#[test]
fn test_init_precedes_creation() {
    let (_window, probe) = open(640, 480, "Order");
    assert_eq!(
        probe.events(),
        vec![LifecycleEvent::Initialized, LifecycleEvent::WindowCreated]
    );
}

#[test]
fn test_should_close_is_a_pure_query() {
    let (window, probe) = open(800, 600, "Pure");

    for _ in 0..10 {
        assert!(!window.should_close());
    }
    assert_eq!(probe.polls(), 0);
    assert_eq!(probe.events().len(), 2);
}

#[test]
fn test_external_close_signal() {
    let (window, probe) = open(800, 600, "Close Me");

    probe.signal_close();
    assert!(window.should_close());
    assert!(window.should_close());
}

#[test]
fn test_set_should_close() {
    let (mut window, _probe) = open(800, 600, "Programmatic");

    window.set_should_close(true);
    assert!(window.should_close());
    window.set_should_close(false);
    assert!(!window.should_close());
}

#[test]
fn test_poll_events_reaches_backend() {
    let (mut window, probe) = open(800, 600, "Polling");

    window.poll_events();
    window.poll_events();
    assert_eq!(probe.polls(), 2);
}

#[test]
fn test_immediate_drop_tears_down_in_reverse_order() {
    let (window, probe) = open(800, 600, "Short Lived");
    drop(window);

    assert_eq!(
        probe.events(),
        vec![
            LifecycleEvent::Initialized,
            LifecycleEvent::WindowCreated,
            LifecycleEvent::WindowDestroyed,
            LifecycleEvent::Terminated,
        ]
    );
    assert_eq!(probe.count(LifecycleEvent::Terminated), 1);
}

#[test]
fn test_move_does_not_duplicate_teardown() {
    let (window, probe) = open(800, 600, "Moved");

    let boxed = Box::new(window);
    let moved = *boxed;
    assert!(!moved.should_close());
    drop(moved);

    assert_eq!(probe.count(LifecycleEvent::WindowDestroyed), 1);
    assert_eq!(probe.count(LifecycleEvent::Terminated), 1);
}

#[test]
fn test_zero_size_rejected() {
    for (width, height) in [(0, 600), (800, 0), (0, 0)] {
        let err = Window::<HeadlessBackend>::create(width, height, "Empty").unwrap_err();
        assert!(matches!(
            err,
            WindowError::InvalidDimensions { width: w, height: h } if w == width && h == height
        ));
    }
}

#[test]
fn test_zero_size_on_subsystem_still_terminates() {
    let (subsystem, probe) = failing_subsystem(HeadlessOptions::default());

    let result = Window::with_subsystem(subsystem, 0, 600, "Empty");
    assert!(matches!(result, Err(WindowError::InvalidDimensions { .. })));
    assert_eq!(
        probe.events(),
        vec![LifecycleEvent::Initialized, LifecycleEvent::Terminated]
    );
}

#[test]
fn test_init_failure_fails_construction() {
    let result = Window::<RefusingBackend>::create(800, 600, "Hello Vulkan!");

    match result {
        Err(WindowError::InitializationFailed { backend, reason }) => {
            assert_eq!(backend, "refusing");
            assert_eq!(reason, "no display");
        }
        other => panic!("expected InitializationFailed, got {:?}", other.map(|_| ())),
    }
    assert_eq!(REFUSED_CREATE_CALLS.with(Cell::get), 0);
}

#[test]
fn test_init_failure_from_subsystem() {
    let result = Subsystem::<RefusingBackend>::init();
    assert!(matches!(result, Err(WindowError::InitializationFailed { .. })));
}

#[test]
fn test_creation_failure_terminates_library() {
    let (subsystem, probe) = failing_subsystem(HeadlessOptions {
        fail_create: true,
        ..HeadlessOptions::default()
    });

    let result = Window::with_subsystem(subsystem, 800, 600, "Refused");
    assert!(matches!(result, Err(WindowError::CreationFailed { .. })));
    assert_eq!(probe.count(LifecycleEvent::WindowCreated), 0);
    assert_eq!(probe.count(LifecycleEvent::Terminated), 1);
}

#[test]
fn test_teardown_on_error_return() {
    fn run_then_fail(probe_out: &mut Option<Rc<HeadlessProbe>>) -> Result<(), WindowError> {
        let window = Window::<HeadlessBackend>::create(800, 600, "Early Return")?;
        *probe_out = Some(window.subsystem().backend().probe());
        Window::<HeadlessBackend>::create(0, 0, "Invalid")?;
        Ok(())
    }

    let mut probe = None;
    assert!(run_then_fail(&mut probe).is_err());

    let probe = probe.unwrap();
    assert!(!probe.window_live());
    assert_eq!(probe.count(LifecycleEvent::Terminated), 1);
}

#[test]
fn test_teardown_on_panic() {
    let (window, probe) = open(800, 600, "Unwinding");

    let result = panic::catch_unwind(AssertUnwindSafe(move || {
        let _owned = window;
        panic!("frame failed");
    }));

    assert!(result.is_err());
    assert!(!probe.window_live());
    assert_eq!(probe.count(LifecycleEvent::Terminated), 1);
}

#[test]
fn test_from_config() {
    let config = WindowConfig::default().with_title("Configured");
    let window = Window::<HeadlessBackend>::from_config(&config).unwrap();

    assert_eq!(
        window.extent(),
        (WindowConfig::DEFAULT_WIDTH, WindowConfig::DEFAULT_HEIGHT)
    );
    assert_eq!(window.title(), "Configured");
}

#[test]
fn test_debug_names_backend() {
    let (window, _probe) = open(800, 600, "Debug");
    let text = format!("{window:?}");

    assert!(text.contains("headless"));
    assert!(text.contains("Debug"));
}
