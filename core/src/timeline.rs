use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug)]
struct ScheduledTask<T> {
    due_ms: f64,
    task: T,
}

/// Delayed tasks keyed by due time. Nothing here reads a clock: callers pass
/// `now_ms` in, so tests advance time by hand and the browser drives it from
/// a single timeout armed for [`Timeline::next_due`].
#[derive(Clone, Debug)]
pub struct Timeline<T> {
    tasks: Vec<ScheduledTask<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, task: T) {
        let due_ms = now_ms + delay_ms.max(0.0);
        // keep sorted by due time, FIFO among equal due times
        let at = self
            .tasks
            .iter()
            .position(|scheduled| scheduled.due_ms > due_ms)
            .unwrap_or(self.tasks.len());
        self.tasks.insert(at, ScheduledTask { due_ms, task });
    }

    pub fn cancel_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.tasks.len();
        self.tasks.retain(|scheduled| !predicate(&scheduled.task));
        before - self.tasks.len()
    }

    pub fn next_due(&self) -> Option<f64> {
        self.tasks.first().map(|scheduled| scheduled.due_ms)
    }

    /// Removes and returns every task due at or before `now_ms`, in due order.
    pub fn take_due(&mut self, now_ms: f64) -> Vec<T> {
        let split = self
            .tasks
            .iter()
            .position(|scheduled| scheduled.due_ms > now_ms)
            .unwrap_or(self.tasks.len());
        self.tasks.drain(..split).map(|scheduled| scheduled.task).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Hands out [`RunToken`]s; beginning a new run invalidates every earlier token.
#[derive(Clone, Debug, Default)]
pub struct RunSlot {
    generation: Rc<Cell<u64>>,
}

impl RunSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RunToken {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        RunToken {
            generation: Rc::clone(&self.generation),
            value: next,
        }
    }

    /// Invalidates the current run without starting a new one.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

#[derive(Clone, Debug)]
pub struct RunToken {
    generation: Rc<Cell<u64>>,
    value: u64,
}

impl RunToken {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.value
    }
}
