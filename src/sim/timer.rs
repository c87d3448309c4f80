//! One-shot tasks scheduled against the frame clock

/// Deferred work the game loop knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    /// Leave the game over splash and go back to the title
    ReturnToTitle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Timer {
    fire_at: f64,
    task: ScheduledTask,
}

/// Pending one-shot timers. Each fires once, on the first poll at or after its time.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    pending: Vec<Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, fire_at: f64, task: ScheduledTask) {
        self.pending.push(Timer { fire_at, task });
    }

    /// Remove and return every task due at `now`, earliest first
    pub fn pop_due(&mut self, now: f64) -> Vec<ScheduledTask> {
        let mut due: Vec<Timer> = Vec::new();
        self.pending.retain(|t| {
            if t.fire_at <= now {
                due.push(*t);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.fire_at.total_cmp(&b.fire_at));
        due.into_iter().map(|t| t.task).collect()
    }

    pub fn is_scheduled(&self, task: ScheduledTask) -> bool {
        self.pending.iter().any(|t| t.task == task)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_at_or_after_deadline() {
        let mut timers = TimerQueue::new();
        timers.schedule(5.0, ScheduledTask::ReturnToTitle);
        assert!(timers.pop_due(4.999).is_empty());
        assert_eq!(timers.pop_due(5.0), vec![ScheduledTask::ReturnToTitle]);
        assert!(timers.pop_due(6.0).is_empty());
        assert!(timers.is_empty());
    }

    #[test]
    fn test_late_poll_still_fires() {
        let mut timers = TimerQueue::new();
        timers.schedule(1.0, ScheduledTask::ReturnToTitle);
        assert!(timers.is_scheduled(ScheduledTask::ReturnToTitle));
        assert_eq!(timers.pop_due(100.0).len(), 1);
        assert!(!timers.is_scheduled(ScheduledTask::ReturnToTitle));
    }

    #[test]
    fn test_only_due_tasks_removed() {
        let mut timers = TimerQueue::new();
        timers.schedule(1.0, ScheduledTask::ReturnToTitle);
        timers.schedule(3.0, ScheduledTask::ReturnToTitle);
        assert_eq!(timers.pop_due(2.0).len(), 1);
        assert_eq!(timers.len(), 1);
    }
}
