//! Application state container.
//!
//! A [`Store`] is an ordinary value owned by whoever drives the UI; there is
//! no process-wide instance. State changes only through [`Store::dispatch`],
//! which runs the middleware chain around the pure [`reduce`] function and
//! then notifies subscribers if anything changed.

use crate::config::{ConfigKey, DonutConfig};
use instant::Instant;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AppState {
    pub donut: DonutConfig,
    /// Bumped on every dispatch that changes `donut`.
    pub revision: u64,
}

impl AppState {
    pub fn new(donut: DonutConfig) -> Self {
        Self { donut, revision: 0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Set(ConfigKey, f32),
    Replace(DonutConfig),
    Reset,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Set(key, value) => write!(f, "set {key}={value}"),
            Action::Replace(_) => f.write_str("replace"),
            Action::Reset => f.write_str("reset"),
        }
    }
}

pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut donut = state.donut;
    match *action {
        Action::Set(key, value) => donut.set(key, value),
        Action::Replace(next) => donut = next,
        Action::Reset => donut = DonutConfig::default(),
    }
    if donut == state.donut {
        return *state;
    }
    AppState {
        donut,
        revision: state.revision + 1,
    }
}

/// Hooks run around every dispatch, in registration order.
pub trait Middleware {
    fn before_dispatch(&mut self, _state: &AppState, _action: &Action) {}
    fn after_dispatch(&mut self, _prev: &AppState, _next: &AppState, _action: &Action) {}
}

/// Logs each action with its duration and the resulting state.
/// Collapsed mode drops to debug level and omits the state.
#[derive(Debug, Default)]
pub struct LoggerMiddleware {
    pub collapsed: bool,
    started: Option<Instant>,
}

impl LoggerMiddleware {
    pub fn new(collapsed: bool) -> Self {
        Self {
            collapsed,
            started: None,
        }
    }
}

impl Middleware for LoggerMiddleware {
    fn before_dispatch(&mut self, _state: &AppState, _action: &Action) {
        self.started = Some(Instant::now());
    }

    fn after_dispatch(&mut self, prev: &AppState, next: &AppState, action: &Action) {
        let elapsed_ms = self
            .started
            .take()
            .map(|t| t.elapsed().as_secs_f64() * 1000.0)
            .unwrap_or(0.0);
        if self.collapsed {
            log::debug!(
                "[store] {} rev {}->{} ({:.2} ms)",
                action,
                prev.revision,
                next.revision,
                elapsed_ms
            );
        } else {
            log::info!(
                "[store] {} rev {}->{} ({:.2} ms) next={:?}",
                action,
                prev.revision,
                next.revision,
                elapsed_ms,
                next.donut
            );
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&AppState)>;

pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: initial,
            middleware: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn with_middleware(mut self, middleware: impl Middleware + 'static) -> Self {
        self.middleware.push(Box::new(middleware));
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply `action`. Returns whether the state changed; subscribers are
    /// called only in that case.
    pub fn dispatch(&mut self, action: Action) -> bool {
        for m in &mut self.middleware {
            m.before_dispatch(&self.state, &action);
        }
        let prev = self.state;
        self.state = reduce(&prev, &action);
        for m in &mut self.middleware {
            m.after_dispatch(&prev, &self.state, &action);
        }
        let changed = self.state != prev;
        if changed {
            for (_, subscriber) in &mut self.subscribers {
                subscriber(&self.state);
            }
        }
        changed
    }

    /// Register a listener called after every state change. Listeners run
    /// in subscription order.
    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
