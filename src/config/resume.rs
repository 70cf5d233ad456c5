//! Resume counters encoded in checkpoint file names
//!
//! Checkpoints are written as `iteration-<N>-epoch-<M>.ckpt` inside the logger
//! directory; resuming recovers both counters from that name.

use crate::config::schema::RootConfig;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static CHECKPOINT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"iteration-(\d+)-epoch-(\d+)\.ckpt").expect("Invalid checkpoint name regex")
});

/// Iteration and epoch at which training continues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResumePoint {
    pub iteration: u64,
    pub epoch: u64,
}

impl ResumePoint {
    pub fn new(iteration: u64, epoch: u64) -> Self {
        Self { iteration, epoch }
    }

    /// Recover counters from a checkpoint path; `None` if the name does not match
    pub fn from_checkpoint(path: impl AsRef<Path>) -> Option<Self> {
        let name = path.as_ref().file_name()?.to_str()?;
        let captures = CHECKPOINT_NAME.captures(name)?;
        let iteration = captures.get(1)?.as_str().parse().ok()?;
        let epoch = captures.get(2)?.as_str().parse().ok()?;
        Some(Self { iteration, epoch })
    }

    /// File name of the checkpoint written at this point
    pub fn checkpoint_file_name(&self) -> String {
        format!("iteration-{:06}-epoch-{:04}.ckpt", self.iteration, self.epoch)
    }
}

impl RootConfig {
    /// Counters to resume from.
    ///
    /// `None` unless `train.resume` is set and `model.ckpt_file` names a
    /// checkpoint written by a previous run.
    pub fn resume_point(&self) -> Option<ResumePoint> {
        if !self.train.resume {
            return None;
        }
        self.model
            .ckpt_file
            .as_deref()
            .and_then(ResumePoint::from_checkpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_from_str, presets};
    use std::path::PathBuf;

    #[test]
    fn test_parse_checkpoint_name() {
        let point = ResumePoint::from_checkpoint("logs/iteration-000120-epoch-0004.ckpt");
        assert_eq!(point, Some(ResumePoint::new(120, 4)));
    }

    #[test]
    fn test_parse_unpadded_name() {
        let point = ResumePoint::from_checkpoint("iteration-7-epoch-1.ckpt");
        assert_eq!(point, Some(ResumePoint::new(7, 1)));
    }

    #[test]
    fn test_parse_rejects_other_names() {
        assert_eq!(ResumePoint::from_checkpoint("model.ckpt"), None);
        assert_eq!(ResumePoint::from_checkpoint("iteration-x-epoch-1.ckpt"), None);
        assert_eq!(ResumePoint::from_checkpoint("iteration-1-epoch-1.pt"), None);
    }

    #[test]
    fn test_only_file_name_is_parsed() {
        let point = ResumePoint::from_checkpoint("iteration-1-epoch-1.ckpt/model.ckpt");
        assert_eq!(point, None);
    }

    #[test]
    fn test_file_name_round_trip() {
        let point = ResumePoint::new(120, 4);
        let name = point.checkpoint_file_name();
        assert_eq!(name, "iteration-000120-epoch-0004.ckpt");
        assert_eq!(ResumePoint::from_checkpoint(&name), Some(point));
    }

    #[test]
    fn test_resume_point_requires_resume_flag() {
        let mut config = load_from_str(presets::get("icarus_siren").unwrap()).unwrap();
        config.model.ckpt_file = Some(PathBuf::from("iteration-000500-epoch-0005.ckpt"));
        assert_eq!(config.resume_point(), None);

        config.train.resume = true;
        assert_eq!(config.resume_point(), Some(ResumePoint::new(500, 5)));

        config.model.ckpt_file = None;
        assert_eq!(config.resume_point(), None);
    }
}
