//! Debounce с явным владением таймером.
//!
//! Каждый новый вызов отменяет ранее запланированную задачу, поэтому в пределах
//! окна тишины срабатывает только последний вызов.

use gloo_timers::callback::Timeout;

/// Планировщик отложенных задач
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

/// Планировщик на основе `setTimeout` браузера
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn cancel(&self, handle: Timeout) {
        handle.cancel();
    }
}

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn set_delay_ms(&mut self, delay_ms: u32) {
        self.delay_ms = delay_ms;
    }

    /// Отменяет ожидающую задачу и планирует новую
    pub fn call(&mut self, task: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(task)));
    }

    /// Отменяет ожидающую задачу, если она есть
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Entry {
        id: usize,
        due: u64,
        task: Option<Box<dyn FnOnce()>>,
    }

    /// Ручные часы для тестов: задачи выполняются только в `advance`
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        now: Rc<RefCell<u64>>,
        queue: Rc<RefCell<Vec<Entry>>>,
        next_id: Rc<RefCell<usize>>,
    }

    impl ManualScheduler {
        pub fn advance(&self, ms: u64) {
            let target = *self.now.borrow() + ms;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    queue.sort_by_key(|e| e.due);
                    match queue.first() {
                        Some(entry) if entry.due <= target => Some(queue.remove(0)),
                        _ => None,
                    }
                };
                let Some(mut entry) = next else { break };
                *self.now.borrow_mut() = entry.due;
                if let Some(task) = entry.task.take() {
                    task();
                }
            }
            *self.now.borrow_mut() = target;
        }

        pub fn pending(&self) -> usize {
            self.queue.borrow().len()
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = usize;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> usize {
            let id = {
                let mut next = self.next_id.borrow_mut();
                *next += 1;
                *next
            };
            let due = *self.now.borrow() + delay_ms as u64;
            self.queue.borrow_mut().push(Entry {
                id,
                due,
                task: Some(task),
            });
            id
        }

        fn cancel(&self, handle: usize) {
            self.queue.borrow_mut().retain(|e| e.id != handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::ManualScheduler;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) -> Box<dyn FnOnce()>) {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let sink = fired.clone();
        let make = move |q: &str| -> Box<dyn FnOnce()> {
            let sink = sink.clone();
            let q = q.to_string();
            Box::new(move || sink.borrow_mut().push(q))
        };
        (fired, make)
    }

    #[test]
    fn only_last_call_in_window_fires() {
        let clock = ManualScheduler::default();
        let mut debouncer = Debouncer::new(clock.clone(), 300);
        let (fired, make) = recorder();

        debouncer.call(make("l"));
        clock.advance(100);
        debouncer.call(make("la"));
        clock.advance(100);
        debouncer.call(make("lap"));
        clock.advance(299);
        assert!(fired.borrow().is_empty());

        clock.advance(1);
        assert_eq!(*fired.borrow(), vec!["lap".to_string()]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn calls_separated_by_quiet_window_both_fire() {
        let clock = ManualScheduler::default();
        let mut debouncer = Debouncer::new(clock.clone(), 300);
        let (fired, make) = recorder();

        debouncer.call(make("a"));
        clock.advance(300);
        debouncer.call(make("b"));
        clock.advance(300);

        assert_eq!(*fired.borrow(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn cancel_drops_pending_task() {
        let clock = ManualScheduler::default();
        let mut debouncer = Debouncer::new(clock.clone(), 300);
        let (fired, make) = recorder();

        debouncer.call(make("x"));
        debouncer.cancel();
        clock.advance(1_000);

        assert!(fired.borrow().is_empty());
    }
}
