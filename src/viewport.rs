//! Viewport Resize Subscriptions
//!
//! The host page reports window resizes to a [`Viewport`]. Views register a
//! listener when they mount and get back a [`ResizeSubscription`]; dropping
//! the subscription removes the listener, so unmounting a view can never
//! leave a dangling callback behind.
//!
//! Single-threaded: the viewport lives on the UI thread and is shared with
//! `Rc`.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

/// Widths below this many pixels use the mobile layout
pub const MOBILE_BREAKPOINT: u32 = 768;

pub fn is_mobile_width(width: u32, breakpoint: u32) -> bool {
    width < breakpoint
}

type Listener = Rc<RefCell<dyn FnMut(u32)>>;

/// Current window width plus the registered resize listeners
pub struct Viewport {
    width: Cell<u32>,
    breakpoint: u32,
    listeners: RefCell<BTreeMap<u64, Listener>>,
    next_id: Cell<u64>,
}

impl Viewport {
    pub fn new(width: u32) -> Rc<Self> {
        Self::with_breakpoint(width, MOBILE_BREAKPOINT)
    }

    pub fn with_breakpoint(width: u32, breakpoint: u32) -> Rc<Self> {
        Rc::new(Self {
            width: Cell::new(width),
            breakpoint,
            listeners: RefCell::new(BTreeMap::new()),
            next_id: Cell::new(0),
        })
    }

    pub fn width(&self) -> u32 {
        self.width.get()
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    pub fn is_mobile(&self) -> bool {
        is_mobile_width(self.width(), self.breakpoint)
    }

    /// Number of live subscriptions
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Register `listener` for resize events until the returned guard drops
    pub fn subscribe<F>(self: &Rc<Self>, listener: F) -> ResizeSubscription
    where
        F: FnMut(u32) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let listener: Listener = Rc::new(RefCell::new(listener));
        self.listeners.borrow_mut().insert(id, listener);
        tracing::debug!(subscription = id, "Resize listener registered");

        ResizeSubscription {
            id,
            viewport: Rc::downgrade(self),
        }
    }

    /// Record a new width and notify every listener
    ///
    /// Listeners are snapshotted first, so a listener may drop its own or
    /// another subscription while being notified.
    pub fn resize(&self, width: u32) {
        self.width.set(width);

        let snapshot: Vec<Listener> = self.listeners.borrow().values().cloned().collect();
        for listener in snapshot {
            // A listener re-entering resize() would already hold its own borrow
            if let Ok(mut callback) = listener.try_borrow_mut() {
                (&mut *callback)(width);
            }
        }
    }

    fn unsubscribe(&self, id: u64) {
        if self.listeners.borrow_mut().remove(&id).is_some() {
            tracing::debug!(subscription = id, "Resize listener released");
        }
    }
}

/// Guard for a registered resize listener
///
/// The listener stays registered exactly as long as this value lives.
#[must_use = "dropping the subscription immediately unregisters the listener"]
pub struct ResizeSubscription {
    id: u64,
    viewport: Weak<Viewport>,
}

impl ResizeSubscription {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(viewport) = self.viewport.upgrade() {
            viewport.unsubscribe(self.id);
        }
    }
}

/// Mobile flag kept in sync with a viewport for as long as it is alive
pub struct MobileWatch {
    is_mobile: Rc<Cell<bool>>,
    _subscription: ResizeSubscription,
}

impl MobileWatch {
    /// Start watching at mount
    pub fn mount(viewport: &Rc<Viewport>) -> Self {
        let is_mobile = Rc::new(Cell::new(viewport.is_mobile()));
        let breakpoint = viewport.breakpoint();

        let flag = Rc::clone(&is_mobile);
        let subscription = viewport.subscribe(move |width| {
            flag.set(is_mobile_width(width, breakpoint));
        });

        Self {
            is_mobile,
            _subscription: subscription,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint() {
        assert!(is_mobile_width(767, MOBILE_BREAKPOINT));
        assert!(!is_mobile_width(768, MOBILE_BREAKPOINT));
    }

    #[test]
    fn test_subscription_released_on_drop() {
        let viewport = Viewport::new(1024);
        let seen = Rc::new(Cell::new(0u32));

        let sink = Rc::clone(&seen);
        let subscription = viewport.subscribe(move |w| sink.set(w));
        assert_eq!(viewport.listener_count(), 1);

        viewport.resize(640);
        assert_eq!(seen.get(), 640);

        drop(subscription);
        assert_eq!(viewport.listener_count(), 0);

        viewport.resize(1440);
        assert_eq!(seen.get(), 640);
    }

    #[test]
    fn test_mobile_watch_mount_unmount() {
        let viewport = Viewport::new(1280);
        {
            let watch = MobileWatch::mount(&viewport);
            assert!(!watch.is_mobile());

            viewport.resize(375);
            assert!(watch.is_mobile());
            assert_eq!(viewport.listener_count(), 1);
        }
        assert_eq!(viewport.listener_count(), 0);
        assert!(viewport.is_mobile());
    }

    #[test]
    fn test_listener_can_drop_subscription_during_dispatch() {
        let viewport = Viewport::new(1024);
        let slot: Rc<RefCell<Option<ResizeSubscription>>> = Rc::new(RefCell::new(None));

        let inner = Rc::clone(&slot);
        let subscription = viewport.subscribe(move |_| {
            inner.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(subscription);

        viewport.resize(500);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outlives_viewport() {
        let viewport = Viewport::new(1024);
        let subscription = viewport.subscribe(|_| {});
        drop(viewport);
        drop(subscription);
    }
}
