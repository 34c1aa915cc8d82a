use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{PageAction, PageEffect, PageState};

pub(crate) type AppSubscriber = Rc<dyn Fn()>;
pub(crate) type EffectHandler = Rc<dyn Fn(PageEffect)>;

/// Owns the page state. Views subscribe for change notifications; effects
/// produced by the reducer are forwarded to the installed handler.
pub(crate) struct AppCore {
    state: RefCell<PageState>,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
    effect_handler: RefCell<Option<EffectHandler>>,
}

impl AppCore {
    pub(crate) fn new(state: PageState) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(state),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            effect_handler: RefCell::new(None),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: AppSubscriber) -> AppSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        AppSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub(crate) fn set_effect_handler(&self, handler: Option<EffectHandler>) {
        *self.effect_handler.borrow_mut() = handler;
    }

    pub(crate) fn snapshot(&self) -> PageState {
        self.state.borrow().clone()
    }

    pub(crate) fn dispatch(&self, action: PageAction) {
        let outcome = self.state.borrow_mut().apply(action);
        if outcome.changed {
            self.notify_subscribers();
        }
        if outcome.effects.is_empty() {
            return;
        }
        let handler = self.effect_handler.borrow().clone();
        let Some(handler) = handler else {
            return;
        };
        for effect in outcome.effects {
            handler(effect);
        }
    }

    fn notify_subscribers(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }
}

pub(crate) struct AppSubscription {
    subscriber: AppSubscriber,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

impl Drop for AppSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}
