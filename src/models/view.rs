//! Read-only views the status filter evaluates
//!
//! The filter never looks at concrete pipeline types. Anything that can
//! answer these queries can be filtered: the snapshot models below, or an
//! adapter around some other domain object.

use crate::models::{Pipeline, Stage};

/// Status queries on a single stage run
pub trait StageView {
    fn is_building(&self) -> bool;
    /// In progress with a failed job; not terminal
    fn is_failing(&self) -> bool;
    /// Terminal failure
    fn is_failed(&self) -> bool;
    fn is_cancelled(&self) -> bool;
}

/// Status queries on a pipeline
pub trait PipelineView {
    type Stage: StageView;

    fn is_paused(&self) -> bool;
    /// Most recently run stage, `None` if nothing has run
    fn latest_stage(&self) -> Option<&Self::Stage>;
}

impl StageView for Stage {
    fn is_building(&self) -> bool {
        Stage::is_building(self)
    }

    fn is_failing(&self) -> bool {
        Stage::is_failing(self)
    }

    fn is_failed(&self) -> bool {
        Stage::is_failed(self)
    }

    fn is_cancelled(&self) -> bool {
        Stage::is_cancelled(self)
    }
}

impl PipelineView for Pipeline {
    type Stage = Stage;

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn latest_stage(&self) -> Option<&Stage> {
        Pipeline::latest_stage(self)
    }
}
