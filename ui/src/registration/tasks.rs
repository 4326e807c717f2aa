//! Generation tokens for the page's fire-and-forget tasks.
//!
//! A task records the generation it started under. Starting a newer task of the same
//! kind, or invalidating the kind outright, makes older continuations stale so they
//! cannot overwrite newer state when they finally resume.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    PhotoDecode,
    Submission,
    ModalTeardown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskToken {
    pub kind: TaskKind,
    generation: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskGenerations {
    photo_decode: u64,
    submission: u64,
    modal_teardown: u64,
}

impl TaskGenerations {
    fn slot(&mut self, kind: TaskKind) -> &mut u64 {
        match kind {
            TaskKind::PhotoDecode => &mut self.photo_decode,
            TaskKind::Submission => &mut self.submission,
            TaskKind::ModalTeardown => &mut self.modal_teardown,
        }
    }

    fn current(&self, kind: TaskKind) -> u64 {
        match kind {
            TaskKind::PhotoDecode => self.photo_decode,
            TaskKind::Submission => self.submission,
            TaskKind::ModalTeardown => self.modal_teardown,
        }
    }

    /// Start a task of `kind`, superseding any in flight.
    pub fn begin(&mut self, kind: TaskKind) -> TaskToken {
        let slot = self.slot(kind);
        *slot += 1;
        TaskToken {
            kind,
            generation: *slot,
        }
    }

    /// Make every in-flight task of `kind` stale.
    pub fn invalidate(&mut self, kind: TaskKind) {
        *self.slot(kind) += 1;
    }

    pub fn is_current(&self, token: TaskToken) -> bool {
        self.current(token.kind) == token.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_task_supersedes_older() {
        let mut tasks = TaskGenerations::default();
        let first = tasks.begin(TaskKind::PhotoDecode);
        let second = tasks.begin(TaskKind::PhotoDecode);

        assert!(!tasks.is_current(first));
        assert!(tasks.is_current(second));
    }

    #[test]
    fn test_invalidate_makes_token_stale() {
        let mut tasks = TaskGenerations::default();
        let token = tasks.begin(TaskKind::Submission);
        tasks.invalidate(TaskKind::Submission);

        assert!(!tasks.is_current(token));
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut tasks = TaskGenerations::default();
        let decode = tasks.begin(TaskKind::PhotoDecode);
        tasks.begin(TaskKind::Submission);
        tasks.invalidate(TaskKind::ModalTeardown);

        assert!(tasks.is_current(decode));
    }
}
