/// Events emitted by the workflows while they run.
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    GroupsStart { total: u64 },
    GroupFinished { name: String, succeeded: bool },
    GroupsFinish,
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_is_silent() {
        ProgressReporter::new().report(Progress::GroupsFinish);
    }

    #[test]
    fn callback_receives_events_in_order() {
        let seen = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            let label = match event {
                Progress::GroupsStart { total } => format!("start {}", total),
                Progress::GroupFinished { name, succeeded } => format!("{} {}", name, succeeded),
                Progress::GroupsFinish => "finish".to_string(),
                _ => "other".to_string(),
            };
            seen.lock().unwrap().push(label);
        }));

        reporter.report(Progress::GroupsStart { total: 1 });
        reporter.report(Progress::GroupFinished {
            name: "dipole".to_string(),
            succeeded: true,
        });
        reporter.report(Progress::GroupsFinish);
        drop(reporter);

        assert_eq!(
            seen.into_inner().unwrap(),
            vec!["start 1", "dipole true", "finish"]
        );
    }
}
