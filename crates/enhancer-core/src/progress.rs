//! Progress observer seam between the orchestrator and its caller.

use crate::models::ProcessingProgress;

/// Receives progress notifications from the enhancement orchestrator.
///
/// Implemented for plain closures, so callers can pass
/// `&|p: &ProcessingProgress| ...` without defining a type.
pub trait ProgressObserver {
    fn on_progress(&self, progress: &ProcessingProgress);
}

impl<F> ProgressObserver for F
where
    F: Fn(&ProcessingProgress),
{
    fn on_progress(&self, progress: &ProcessingProgress) {
        self(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProgressStage;
    use std::cell::RefCell;

    #[test]
    fn closures_are_observers() {
        let seen = RefCell::new(Vec::new());
        let observer = |p: &ProcessingProgress| seen.borrow_mut().push(p.clone());

        let event = ProcessingProgress::new(ProgressStage::Uploading, 10, "Uploading image...");
        ProgressObserver::on_progress(&observer, &event);

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].progress, 10);
    }
}
