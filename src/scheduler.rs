use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use js_sys::Date;

use folio_core::{PageTask, Timeline};

pub(crate) type TaskHandler = Rc<dyn Fn(PageTask)>;

/// Browser driver for a [`Timeline`]: a single timeout is kept armed for the
/// earliest pending task.
pub(crate) struct TaskScheduler {
    timeline: RefCell<Timeline<PageTask>>,
    timer: RefCell<Option<Timeout>>,
    armed_for: Cell<Option<f64>>,
    on_due: RefCell<Option<TaskHandler>>,
}

impl TaskScheduler {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            timeline: RefCell::new(Timeline::new()),
            timer: RefCell::new(None),
            armed_for: Cell::new(None),
            on_due: RefCell::new(None),
        })
    }

    pub(crate) fn set_on_due(&self, handler: Option<TaskHandler>) {
        *self.on_due.borrow_mut() = handler;
    }

    pub(crate) fn schedule(self: &Rc<Self>, delay_ms: f64, task: PageTask) {
        self.timeline
            .borrow_mut()
            .schedule(now_ms(), delay_ms, task);
        self.rearm();
    }

    pub(crate) fn cancel_where<F>(self: &Rc<Self>, predicate: F) -> usize
    where
        F: FnMut(&PageTask) -> bool,
    {
        let removed = self.timeline.borrow_mut().cancel_where(predicate);
        if removed > 0 {
            self.rearm();
        }
        removed
    }

    pub(crate) fn pending(&self) -> usize {
        self.timeline.borrow().len()
    }

    fn rearm(self: &Rc<Self>) {
        let next_due = self.timeline.borrow().next_due();
        let Some(due) = next_due else {
            self.timer.borrow_mut().take();
            self.armed_for.set(None);
            return;
        };
        if self.armed_for.get() == Some(due) && self.timer.borrow().is_some() {
            return;
        }
        let delay_ms = (due - now_ms()).max(0.0).ceil() as u32;
        let scheduler = Rc::downgrade(self);
        *self.timer.borrow_mut() = Some(Timeout::new(delay_ms, move || {
            if let Some(scheduler) = scheduler.upgrade() {
                scheduler.fire();
            }
        }));
        self.armed_for.set(Some(due));
    }

    fn fire(self: &Rc<Self>) {
        self.timer.borrow_mut().take();
        self.armed_for.set(None);
        let due = self.timeline.borrow_mut().take_due(now_ms());
        let handler = self.on_due.borrow().clone();
        if let Some(handler) = handler {
            for task in due {
                handler(task);
            }
        }
        self.rearm();
    }
}

pub(crate) fn now_ms() -> f64 {
    Date::now()
}
