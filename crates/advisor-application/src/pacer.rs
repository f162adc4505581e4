//! Paced delivery of advisor replies.
//!
//! A [`ReplyPacer`] runs at most one script at a time on a tokio task.
//! Scheduling while a script is still pending cancels its timer and delivers
//! its remaining messages at once, in order, before the new script starts.
//! Messages are never dropped and two scripts never interleave.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use advisor_core::conversation::ChatMessage;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::script::{ReplyScript, ScriptStep};

type Queue = Arc<Mutex<VecDeque<ScriptStep>>>;

struct PendingScript {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
    queue: Queue,
}

pub struct ReplyPacer {
    output: UnboundedSender<ChatMessage>,
    pending: Option<PendingScript>,
}

impl ReplyPacer {
    /// Creates a pacer delivering to `output`.
    pub fn new(output: UnboundedSender<ChatMessage>) -> Self {
        Self {
            output,
            pending: None,
        }
    }

    /// Schedules a script, flushing any pending one first.
    ///
    /// Leading zero-delay steps are delivered before this returns.
    pub async fn schedule(&mut self, script: ReplyScript) {
        self.flush().await;

        let mut steps: VecDeque<ScriptStep> = script.into_steps().into();
        while steps.front().is_some_and(|step| step.delay.is_zero()) {
            if let Some(step) = steps.pop_front() {
                self.deliver(step.message);
            }
        }
        if steps.is_empty() {
            return;
        }

        debug!(steps = steps.len(), "Scheduling reply script");
        let queue: Queue = Arc::new(Mutex::new(steps));
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_script(
            Arc::clone(&queue),
            cancel.clone(),
            self.output.clone(),
        ));

        self.pending = Some(PendingScript {
            cancel,
            handle,
            queue,
        });
    }

    /// Stops the pending script, if any, and delivers what it had left.
    pub async fn flush(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        pending.cancel.cancel();
        if let Err(e) = pending.handle.await {
            warn!(error = %e, "Reply script task failed");
        }

        let remaining: Vec<ScriptStep> = match pending.queue.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        };
        if !remaining.is_empty() {
            debug!(steps = remaining.len(), "Flushing pending reply script");
        }
        for step in remaining {
            self.deliver(step.message);
        }
    }

    /// Whether a script still has undelivered messages.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.handle.is_finished())
    }

    fn deliver(&self, message: ChatMessage) {
        if self.output.send(message).is_err() {
            warn!("Reply receiver dropped, message discarded");
        }
    }
}

/// Delivers queued steps one by one. A step leaves the queue only when it is
/// sent, so after cancellation the queue holds exactly the undelivered steps.
async fn run_script(queue: Queue, cancel: CancellationToken, output: UnboundedSender<ChatMessage>) {
    loop {
        let delay = match queue.lock() {
            Ok(queue) => queue.front().map(|step| step.delay),
            Err(_) => return,
        };
        let Some(delay) = delay else {
            return;
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => return,
            _ = tokio::time::sleep(delay) => {}
        }

        let step = match queue.lock() {
            Ok(mut queue) => queue.pop_front(),
            Err(_) => return,
        };
        if let Some(step) = step {
            if output.send(step.message).is_err() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::Instant;

    fn script(steps: &[(u64, &str)]) -> ReplyScript {
        steps.iter().fold(ReplyScript::new(), |script, (ms, text)| {
            script.then(Duration::from_millis(*ms), ChatMessage::advisor(*text))
        })
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<ChatMessage>) -> Vec<ChatMessage> {
        let mut messages = Vec::new();
        while let Ok(message) = rx.try_recv() {
            messages.push(message);
        }
        messages
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_is_immediate() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut pacer = ReplyPacer::new(tx);

        pacer.schedule(script(&[(0, "now")])).await;

        assert_eq!(drain(&mut rx), vec![ChatMessage::advisor("now")]);
        assert!(!pacer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_steps_wait_for_their_delays() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut pacer = ReplyPacer::new(tx);
        let start = Instant::now();

        pacer
            .schedule(script(&[(0, "loading"), (1500, "routine"), (1000, "ready")]))
            .await;
        assert_eq!(rx.recv().await, Some(ChatMessage::advisor("loading")));

        assert_eq!(rx.recv().await, Some(ChatMessage::advisor("routine")));
        assert!(start.elapsed() >= Duration::from_millis(1500));

        assert_eq!(rx.recv().await, Some(ChatMessage::advisor("ready")));
        assert!(start.elapsed() >= Duration::from_millis(2500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_script_flushes_pending_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut pacer = ReplyPacer::new(tx);

        pacer.schedule(script(&[(500, "a"), (1000, "b")])).await;
        assert!(drain(&mut rx).is_empty());

        pacer.schedule(script(&[(0, "c"), (300, "d")])).await;
        assert_eq!(
            drain(&mut rx),
            vec![
                ChatMessage::advisor("a"),
                ChatMessage::advisor("b"),
                ChatMessage::advisor("c"),
            ]
        );

        assert_eq!(rx.recv().await, Some(ChatMessage::advisor("d")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_after_partial_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut pacer = ReplyPacer::new(tx);

        pacer.schedule(script(&[(100, "first"), (5000, "second")])).await;
        assert_eq!(rx.recv().await, Some(ChatMessage::advisor("first")));

        pacer.flush().await;
        assert_eq!(drain(&mut rx), vec![ChatMessage::advisor("second")]);
        assert!(!pacer.is_pending());
    }
}
