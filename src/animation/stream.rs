//! Per-resource snapshot stream derived from the shared scroll signal.

use std::fmt;
use std::rc::Rc;

use super::ActStateSnapshot;
use crate::host::ScrollHost;
use crate::resource::SharedResource;
use crate::signal::{Signal, Subscription};

type Project = Rc<dyn Fn(f64) -> ActStateSnapshot>;

/// Snapshots of one resource, one per scroll tick.
///
/// Cheap to clone. Each subscriber is driven by the source signal directly,
/// so all of them observe the same offset per tick.
#[derive(Clone)]
pub struct ActStream {
    source: Signal<f64>,
    project: Project,
}

impl ActStream {
    /// Scroll-react stream for `resource`. The resource is captured by
    /// handle, so later edits to it show up on the next tick.
    #[must_use]
    pub fn scroll_react(
        source: Signal<f64>,
        host: Rc<dyn ScrollHost>,
        resource: SharedResource,
    ) -> Self {
        Self {
            source,
            project: Rc::new(move |scroll_top| {
                ActStateSnapshot::scroll_react(
                    &resource,
                    host.viewport(),
                    scroll_top,
                )
            }),
        }
    }

    /// Snapshot at the signal's current offset.
    #[must_use]
    pub fn current(&self) -> ActStateSnapshot {
        (self.project)(self.source.get())
    }

    /// Subscribe to snapshots; the first one is delivered immediately.
    #[must_use = "dropping a Subscription leaves the listener attached"]
    pub fn subscribe(
        &self,
        mut listener: impl FnMut(&ActStateSnapshot) + 'static,
    ) -> Subscription {
        let project = Rc::clone(&self.project);
        self.source
            .subscribe(move |scroll_top| listener(&project(scroll_top)))
    }
}

impl fmt::Debug for ActStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActStream")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
