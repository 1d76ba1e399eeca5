use crate::schedule::{CancelFlag, Recurring};
use gloo_timers::future::TimeoutFuture;
use std::{future::Future, time::Duration};
use wasm_bindgen_futures::spawn_local;

pub fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Stops the task it was returned for when dropped.
pub struct TaskHandle {
    cancel: CancelFlag,
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

pub fn spawn_task<F, Fut>(build: F) -> TaskHandle
where
    F: FnOnce(CancelFlag) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    let cancel = CancelFlag::new();
    spawn_local(build(cancel.clone()));
    TaskHandle { cancel }
}

pub fn spawn_recurring<R, F>(task: R, first_delay: Duration, on_output: F) -> TaskHandle
where
    R: Recurring + 'static,
    F: FnMut(R::Output) + 'static,
{
    spawn_task(move |cancel| async move {
        run_recurring(task, first_delay, &cancel, on_output).await;
    })
}

/// Steps `task` on browser timers until it finishes or `cancel` is set.
pub async fn run_recurring<R, F>(mut task: R, first_delay: Duration, cancel: &CancelFlag, mut on_output: F)
where
    R: Recurring,
    F: FnMut(R::Output),
{
    let mut delay = Some(first_delay);

    while let Some(wait) = delay {
        if !wait.is_zero() {
            TimeoutFuture::new(millis(wait)).await;
        }
        if cancel.is_cancelled() {
            return;
        }

        let step = task.step();
        on_output(step.output);
        delay = step.next;
    }
}

pub async fn sleep(duration: Duration) {
    TimeoutFuture::new(millis(duration)).await;
}
