//! Class toggler that lets CSS fly elements in and out of view.

use std::rc::Rc;

use super::super::{ActStateSnapshot, AnimationType};
use super::traits::AnimationBehavior;
use crate::host::class_list::{
    add_class_if_not_contains, remove_class_if_contains,
};
use crate::host::Element;
use crate::resource::SharedResource;

/// Class present while the behavior is attached.
pub const BASE_CLASS_NAME: &str = "FlyInOutAnimation";

/// Class present while the element overlaps the viewport.
pub const ANIM_ACT_CLASS_NAME: &str = "FlyInOutAnimation--act";

/// Adds [`ANIM_ACT_CLASS_NAME`] while the element is in view and removes it
/// when it leaves. Transitions are left to the page's stylesheet.
#[derive(Debug, Default)]
pub struct FlyInOut {
    resource: Option<SharedResource>,
}

impl FlyInOut {
    fn with_element(&self, f: impl FnOnce(&dyn Element)) {
        if let Some(resource) = &self.resource {
            let element = Rc::clone(&resource.borrow().element);
            f(element.as_ref());
        }
    }
}

impl AnimationBehavior for FlyInOut {
    fn animation_type(&self) -> AnimationType {
        AnimationType::ScrollReact
    }

    fn resource(&self) -> Option<&SharedResource> {
        self.resource.as_ref()
    }

    fn set_resource(&mut self, resource: SharedResource) {
        self.resource = Some(resource);
    }

    fn on_attached(&mut self) {
        self.with_element(|el| add_class_if_not_contains(el, BASE_CLASS_NAME));
    }

    fn on_detached(&mut self) {
        self.with_element(|el| remove_class_if_contains(el, BASE_CLASS_NAME));
    }

    fn play_animation(&mut self, snapshot: &ActStateSnapshot) {
        let element = Rc::clone(&snapshot.resource().borrow().element);
        if snapshot.scroll_matched() {
            add_class_if_not_contains(element.as_ref(), ANIM_ACT_CLASS_NAME);
        } else {
            remove_class_if_contains(element.as_ref(), ANIM_ACT_CLASS_NAME);
        }
    }

    fn name(&self) -> &'static str {
        "fly-in-out"
    }
}
