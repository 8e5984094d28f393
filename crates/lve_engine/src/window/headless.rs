//! In-process windowing backend
//!
//! Stands in for a real windowing library when there is no display, mostly in
//! tests. Every lifecycle step is recorded on a shared [`HeadlessProbe`] that
//! stays readable after the backend and its window are gone.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::backend::{
    NativeWindow, WindowBackend, WindowDescriptor, WindowError, WindowHints, WindowResult,
};

/// Lifecycle steps recorded by the headless backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Library initialized
    Initialized,
    /// Native window created
    WindowCreated,
    /// Native window destroyed
    WindowDestroyed,
    /// Library terminated
    Terminated,
}

/// Fault injection and scripted behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessOptions {
    /// Refuse to initialize
    pub fail_init: bool,
    /// Refuse to create windows
    pub fail_create: bool,
    /// Raise the close request once this many event polls have run
    pub close_after_polls: Option<u32>,
}

/// Shared record of what the headless backend did
#[derive(Debug, Default)]
pub struct HeadlessProbe {
    events: RefCell<Vec<LifecycleEvent>>,
    polls: Cell<u32>,
    close_requested: Cell<bool>,
    last_hints: Cell<Option<WindowHints>>,
}

impl HeadlessProbe {
    /// All recorded lifecycle steps, oldest first
    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.borrow().clone()
    }

    /// How many times `event` was recorded
    pub fn count(&self, event: LifecycleEvent) -> usize {
        self.events.borrow().iter().filter(|&&e| e == event).count()
    }

    /// Number of event polls so far
    pub fn polls(&self) -> u32 {
        self.polls.get()
    }

    /// Hints passed to the most recent window creation
    pub fn last_hints(&self) -> Option<WindowHints> {
        self.last_hints.get()
    }

    /// Whether a created window has not been destroyed yet
    pub fn window_live(&self) -> bool {
        self.count(LifecycleEvent::WindowCreated) > self.count(LifecycleEvent::WindowDestroyed)
    }

    /// Deliver a close request to the window, as a click on the close button would
    pub fn signal_close(&self) {
        self.close_requested.set(true);
    }

    fn record(&self, event: LifecycleEvent) {
        log::trace!("headless: {:?}", event);
        self.events.borrow_mut().push(event);
    }
}

/// Windowing backend with no display behind it
pub struct HeadlessBackend {
    probe: Rc<HeadlessProbe>,
    options: HeadlessOptions,
}

impl HeadlessBackend {
    /// Initialize with the given options
    pub fn with_options(options: HeadlessOptions) -> WindowResult<Self> {
        if options.fail_init {
            return Err(WindowError::InitializationFailed {
                backend: Self::NAME,
                reason: "initialization refused".to_string(),
            });
        }

        let probe = Rc::new(HeadlessProbe::default());
        probe.record(LifecycleEvent::Initialized);
        Ok(Self { probe, options })
    }

    /// Shared probe for this backend and the windows it creates
    pub fn probe(&self) -> Rc<HeadlessProbe> {
        Rc::clone(&self.probe)
    }
}

impl WindowBackend for HeadlessBackend {
    type Window = HeadlessWindow;

    const NAME: &'static str = "headless";

    fn init() -> WindowResult<Self> {
        Self::with_options(HeadlessOptions::default())
    }

    fn create_window(&mut self, descriptor: &WindowDescriptor<'_>) -> WindowResult<HeadlessWindow> {
        self.probe.last_hints.set(Some(descriptor.hints));
        if self.options.fail_create {
            return Err(descriptor.creation_failed());
        }

        self.probe.record(LifecycleEvent::WindowCreated);
        Ok(HeadlessWindow {
            probe: Rc::clone(&self.probe),
            width: descriptor.width,
            height: descriptor.height,
        })
    }

    fn poll_events(&mut self) {
        let polls = self.probe.polls.get() + 1;
        self.probe.polls.set(polls);

        if self.options.close_after_polls.is_some_and(|limit| polls >= limit) {
            self.probe.signal_close();
        }
    }
}

impl Drop for HeadlessBackend {
    fn drop(&mut self) {
        self.probe.record(LifecycleEvent::Terminated);
    }
}

/// Window created by [`HeadlessBackend`]
#[derive(Debug)]
pub struct HeadlessWindow {
    probe: Rc<HeadlessProbe>,
    width: u32,
    height: u32,
}

impl NativeWindow for HeadlessWindow {
    fn should_close(&self) -> bool {
        self.probe.close_requested.get()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.probe.close_requested.set(should_close);
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Drop for HeadlessWindow {
    fn drop(&mut self) {
        self.probe.record(LifecycleEvent::WindowDestroyed);
    }
}
