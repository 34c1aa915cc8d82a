use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::console;

use folio_core::{PageAction, PageEffect, PageTask, PreferenceStore};

use crate::app_core::AppCore;
use crate::confetti::ConfettiHost;
use crate::persisted_store::LocalStorage;
use crate::scheduler::TaskScheduler;
use crate::viewport::{self, ViewportBindings};

thread_local! {
    static RUNTIME: RefCell<Option<PageRuntime>> = RefCell::new(None);
}

/// Executes reducer effects against the browser and feeds timer and window
/// events back into the core.
pub(crate) struct PageRuntime {
    core: Rc<AppCore>,
    scheduler: Rc<TaskScheduler>,
    _confetti: Rc<ConfettiHost>,
    _viewport: ViewportBindings,
}

impl PageRuntime {
    pub(crate) fn install(
        core: Rc<AppCore>,
        confetti: Rc<ConfettiHost>,
        store: PreferenceStore<LocalStorage>,
    ) {
        let scheduler = TaskScheduler::new();

        let weak_core = Rc::downgrade(&core);
        scheduler.set_on_due(Some(Rc::new(move |task: PageTask| {
            if let Some(core) = weak_core.upgrade() {
                core.dispatch(PageAction::TaskDue(task));
            }
        })));

        let effects = EffectRunner {
            scheduler: Rc::downgrade(&scheduler),
            confetti: Rc::downgrade(&confetti),
            store,
        };
        core.set_effect_handler(Some(Rc::new(move |effect| effects.run(effect))));

        let viewport = ViewportBindings::install(&core);
        let runtime = PageRuntime {
            core,
            scheduler,
            _confetti: confetti,
            _viewport: viewport,
        };
        runtime.core.dispatch(PageAction::PageLoaded);
        console::log!("page runtime: installed, pending tasks", runtime.scheduler.pending());
        RUNTIME.with(|slot| {
            *slot.borrow_mut() = Some(runtime);
        });
    }
}

pub(crate) fn uninstall() {
    let runtime = RUNTIME.with(|slot| slot.borrow_mut().take());
    drop(runtime);
}

impl Drop for PageRuntime {
    fn drop(&mut self) {
        self.core.set_effect_handler(None);
        self.scheduler.set_on_due(None);
    }
}

struct EffectRunner {
    scheduler: Weak<TaskScheduler>,
    confetti: Weak<ConfettiHost>,
    store: PreferenceStore<LocalStorage>,
}

impl EffectRunner {
    fn run(&self, effect: PageEffect) {
        match effect {
            PageEffect::ApplyTheme(theme) => viewport::apply_theme(theme),
            PageEffect::PersistTheme(theme) => {
                if let Err(err) = self.store.save(theme) {
                    console::warn!("theme not persisted:", err.to_string());
                }
            }
            PageEffect::StartConfetti => {
                let Some(confetti) = self.confetti.upgrade() else {
                    return;
                };
                confetti.start();
            }
            PageEffect::SetScrollLock(locked) => viewport::set_scroll_lock(locked),
            PageEffect::ScrollTo { top } => viewport::smooth_scroll_to(top),
            PageEffect::Alert(message) => gloo::dialogs::alert(&message),
            PageEffect::Schedule { delay_ms, task } => {
                let Some(scheduler) = self.scheduler.upgrade() else {
                    return;
                };
                scheduler.schedule(delay_ms, task);
            }
            PageEffect::CancelTileReveals => {
                let Some(scheduler) = self.scheduler.upgrade() else {
                    return;
                };
                scheduler.cancel_where(PageTask::is_tile_reveal);
            }
        }
    }
}
