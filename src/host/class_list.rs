//! Idempotent class-list edits used by behaviors.

use super::Element;

/// Add `class_name` unless the element already carries it.
pub fn add_class_if_not_contains(element: &dyn Element, class_name: &str) {
    if !element.class_contains(class_name) {
        element.class_add(class_name);
    }
}

/// Remove `class_name` if the element carries it.
pub fn remove_class_if_contains(element: &dyn Element, class_name: &str) {
    if element.class_contains(class_name) {
        element.class_remove(class_name);
    }
}
