//! The animation registry: behavior factories, live registrations and the
//! shared scroll signal that drives them.
//!
//! ```ignore
//! let mut registry = AnimationRegistry::new(Rc::new(WindowScrollHost::new()));
//! registry.set_animation_behavior("fly", factory::<FlyInOut>());
//!
//! let hero = DomElement::by_id("hero").unwrap();
//! let resource = AnimationResource::new(Rc::new(hero), "fly").shared();
//! let anim = registry.register_scroll_react_animation(resource)?;
//! // ...
//! registry.unregister_animation(anim.id());
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::animation::behaviors::{BehaviorFactory, SharedBehavior};
use crate::animation::{ActStream, AnimationType};
use crate::error::{FinnError, Result};
use crate::host::ScrollHost;
use crate::options::RegistryOptions;
use crate::resource::SharedResource;
use crate::signal::{ScrollSignal, Subscription};

/// Registry-scoped generator of unique ref ids (`<prefix><n>`).
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    next: u64,
}

impl IdGenerator {
    /// Start counting from zero with `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    /// Next unused id.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Handle to a live registration.
#[derive(Clone)]
pub struct AnimationRef {
    id: String,
    behavior: SharedBehavior,
    on_act: ActStream,
}

impl AnimationRef {
    /// Registration id, unique within its registry.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Behavior instance bound to this registration.
    #[must_use]
    pub fn behavior(&self) -> &SharedBehavior {
        &self.behavior
    }

    /// Snapshot stream of the registered resource.
    #[must_use]
    pub fn on_act(&self) -> &ActStream {
        &self.on_act
    }
}

impl fmt::Debug for AnimationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let behavior = self
            .behavior
            .try_borrow()
            .map_or("<busy>", |b| b.name());
        f.debug_struct("AnimationRef")
            .field("id", &self.id)
            .field("behavior", &behavior)
            .field("on_act", &self.on_act)
            .finish()
    }
}

/// Tracks which resources have which behavior and drives them from one
/// shared scroll signal.
pub struct AnimationRegistry {
    host: Rc<dyn ScrollHost>,
    options: RegistryOptions,
    ids: IdGenerator,
    /// Created on first registration; dropped by `destroy`.
    scrolled: Option<ScrollSignal>,
    refs: FxHashMap<String, AnimationRef>,
    subscriptions: FxHashMap<String, Subscription>,
    /// Live ids in registration order.
    order: Vec<String>,
    behavior_factories: FxHashMap<String, BehaviorFactory>,
}

impl AnimationRegistry {
    /// Registry on `host` with default options.
    #[must_use]
    pub fn new(host: Rc<dyn ScrollHost>) -> Self {
        Self::with_options(host, RegistryOptions::default())
    }

    /// Registry on `host` with explicit options.
    #[must_use]
    pub fn with_options(
        host: Rc<dyn ScrollHost>,
        options: RegistryOptions,
    ) -> Self {
        Self {
            ids: IdGenerator::new(options.id_prefix.clone()),
            host,
            options,
            scrolled: None,
            refs: FxHashMap::default(),
            subscriptions: FxHashMap::default(),
            order: Vec::new(),
            behavior_factories: FxHashMap::default(),
        }
    }

    /// Register (or replace) the behavior factory for `id`.
    ///
    /// Registrations already made with a previous factory keep their
    /// instances.
    pub fn set_animation_behavior(
        &mut self,
        id: impl Into<String>,
        factory: BehaviorFactory,
    ) -> &mut Self {
        let id = id.into();
        if self.behavior_factories.insert(id.clone(), factory).is_some() {
            log::debug!("replaced animation behavior '{id}'");
        }
        self
    }

    /// Whether a factory is registered for `id`.
    #[must_use]
    pub fn has_behavior(&self, id: &str) -> bool {
        self.behavior_factories.contains_key(id)
    }

    /// Register `resource` for an animation of type `kind`.
    ///
    /// Instantiates the resource's behavior, attaches it, and subscribes it
    /// to the resource's snapshot stream. The first snapshot is delivered
    /// before this returns. If the element has no id it receives the
    /// generated ref id.
    ///
    /// # Errors
    ///
    /// [`FinnError::UnknownBehaviorId`] if no factory is registered for
    /// the resource's behavior id, [`FinnError::BehaviorTypeMismatch`] if
    /// the behavior does not serve `kind`. Nothing is registered on error.
    pub fn register_animation(
        &mut self,
        kind: AnimationType,
        resource: SharedResource,
    ) -> Result<AnimationRef> {
        let behavior_id = resource.borrow().behavior_id.clone();
        let factory = self
            .behavior_factories
            .get(&behavior_id)
            .ok_or_else(|| FinnError::UnknownBehaviorId(behavior_id.clone()))?;

        let mut behavior = factory();
        behavior.set_resource(Rc::clone(&resource));

        let declared = behavior.animation_type();
        if declared != kind {
            return Err(FinnError::BehaviorTypeMismatch {
                behavior_id,
                requested: kind,
                declared,
            });
        }

        let id = self.ids.next_id();
        {
            let res = resource.borrow();
            if res.element.id().is_empty() {
                res.element.set_id(&id);
            }
        }

        let source = self
            .scrolled
            .get_or_insert_with(|| ScrollSignal::connect(self.host.as_ref()))
            .signal()
            .clone();
        let on_act = match kind {
            AnimationType::ScrollReact => ActStream::scroll_react(
                source,
                Rc::clone(&self.host),
                Rc::clone(&resource),
            ),
        };

        let behavior: SharedBehavior = Rc::new(RefCell::new(behavior));
        let anim = AnimationRef {
            id: id.clone(),
            behavior: Rc::clone(&behavior),
            on_act,
        };

        behavior.borrow_mut().on_attached();

        let player = Rc::clone(&behavior);
        let subscription = anim.on_act.subscribe(move |snapshot| {
            player.borrow_mut().play_animation(snapshot);
        });

        log::debug!(
            "registered '{id}' ({kind}) with behavior '{behavior_id}'"
        );
        let _ = self.refs.insert(id.clone(), anim.clone());
        let _ = self.subscriptions.insert(id.clone(), subscription);
        self.order.push(id);

        Ok(anim)
    }

    /// [`register_animation`](Self::register_animation) with
    /// [`AnimationType::ScrollReact`].
    ///
    /// # Errors
    ///
    /// See [`register_animation`](Self::register_animation).
    pub fn register_scroll_react_animation(
        &mut self,
        resource: SharedResource,
    ) -> Result<AnimationRef> {
        self.register_animation(AnimationType::ScrollReact, resource)
    }

    /// Remove the registration `ref_id`: run its detach hook and cancel its
    /// subscription. Unknown or already removed ids are ignored.
    pub fn unregister_animation(&mut self, ref_id: &str) {
        if let Some(anim) = self.refs.get(ref_id) {
            anim.behavior.borrow_mut().on_detached();
            log::debug!("unregistered '{ref_id}'");
        }
        let _ = self.refs.remove(ref_id);

        if let Some(mut subscription) = self.subscriptions.remove(ref_id) {
            if !subscription.is_closed() {
                subscription.unsubscribe();
            }
        }

        self.order.retain(|id| id != ref_id);
    }

    /// Tear everything down: every registration, every behavior factory
    /// and the native scroll listener.
    ///
    /// Detach hooks run in registration order when
    /// [`RegistryOptions::detach_on_destroy`] is set. The registry can be
    /// reused afterwards; the scroll listener is re-created on the next
    /// registration.
    pub fn destroy(&mut self) {
        let order = std::mem::take(&mut self.order);
        if self.options.detach_on_destroy {
            for id in &order {
                if let Some(anim) = self.refs.get(id) {
                    anim.behavior.borrow_mut().on_detached();
                }
            }
        }
        self.refs.clear();

        for subscription in self.subscriptions.values_mut() {
            if !subscription.is_closed() {
                subscription.unsubscribe();
            }
        }
        self.subscriptions.clear();

        self.behavior_factories.clear();

        if let Some(mut scrolled) = self.scrolled.take() {
            scrolled.disconnect();
        }
        log::debug!("registry destroyed ({} registrations)", order.len());
    }

    /// Live registration `ref_id`.
    #[must_use]
    pub fn get(&self, ref_id: &str) -> Option<&AnimationRef> {
        self.refs.get(ref_id)
    }

    /// Whether `ref_id` is live.
    #[must_use]
    pub fn contains(&self, ref_id: &str) -> bool {
        self.refs.contains_key(ref_id)
    }

    /// Live ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Whether there are no live registrations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Number of live snapshot subscriptions.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Options the registry was created with.
    #[must_use]
    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }
}

impl fmt::Debug for AnimationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut behaviors: Vec<&str> =
            self.behavior_factories.keys().map(String::as_str).collect();
        behaviors.sort_unstable();
        f.debug_struct("AnimationRegistry")
            .field("options", &self.options)
            .field("registrations", &self.order)
            .field("behaviors", &behaviors)
            .field("scrolled", &self.scrolled)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::animation::behaviors::{
        factory, AnimationBehavior, FlyInOut, ANIM_ACT_CLASS_NAME,
        BASE_CLASS_NAME,
    };
    use crate::animation::ActStateSnapshot;
    use crate::geometry::{ResourceOffset, Viewport};
    use crate::host::memory::{ManualScrollHost, VirtualElement};
    use crate::host::Element;
    use crate::resource::AnimationResource;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Attached,
        Detached,
        Played {
            offset: ResourceOffset,
            viewport: Viewport,
            scrolled: f64,
            matched: bool,
        },
    }

    type Journal = Rc<RefCell<Vec<(String, Event)>>>;

    /// Records every hook call under the element id it is bound to.
    struct Recorder {
        journal: Journal,
        resource: Option<SharedResource>,
    }

    impl Recorder {
        fn log(&self, event: Event) {
            let tag = self
                .resource
                .as_ref()
                .map(|r| r.borrow().element.id())
                .unwrap_or_default();
            self.journal.borrow_mut().push((tag, event));
        }
    }

    impl AnimationBehavior for Recorder {
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
            self.log(Event::Attached);
        }

        fn on_detached(&mut self) {
            self.log(Event::Detached);
        }

        fn play_animation(&mut self, snapshot: &ActStateSnapshot) {
            self.log(Event::Played {
                offset: snapshot.resource_offset(),
                viewport: snapshot.viewport_offset(),
                scrolled: snapshot.scrolled_distance(),
                matched: snapshot.scroll_matched(),
            });
        }
    }

    /// Behavior relying on the default (absent) hooks.
    #[derive(Default)]
    struct Silent {
        resource: Option<SharedResource>,
        plays: Rc<Cell<usize>>,
    }

    impl AnimationBehavior for Silent {
        fn animation_type(&self) -> AnimationType {
            AnimationType::ScrollReact
        }

        fn resource(&self) -> Option<&SharedResource> {
            self.resource.as_ref()
        }

        fn set_resource(&mut self, resource: SharedResource) {
            self.resource = Some(resource);
        }

        fn play_animation(&mut self, _snapshot: &ActStateSnapshot) {
            self.plays.set(self.plays.get() + 1);
        }
    }

    struct Fixture {
        host: Rc<ManualScrollHost>,
        registry: AnimationRegistry,
        journal: Journal,
    }

    fn fixture() -> Fixture {
        let host = Rc::new(ManualScrollHost::new(Viewport::new(320.0, 200.0)));
        let mut registry = AnimationRegistry::new(host.clone());
        let journal: Journal = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&journal);
        let _ = registry.set_animation_behavior(
            "recorder",
            Rc::new(move || -> Box<dyn AnimationBehavior> {
                Box::new(Recorder {
                    journal: Rc::clone(&sink),
                    resource: None,
                })
            }),
        );
        Fixture {
            host,
            registry,
            journal,
        }
    }

    fn element(id: &str, top: f64, height: f64) -> Rc<VirtualElement> {
        Rc::new(VirtualElement::new(id, top, 100.0, height))
    }

    fn resource(el: &Rc<VirtualElement>, behavior: &str) -> SharedResource {
        let el: Rc<dyn Element> = el.clone();
        AnimationResource::new(el, behavior).with_threshold(20.0).shared()
    }

    fn events(journal: &Journal) -> Vec<(String, Event)> {
        std::mem::take(&mut *journal.borrow_mut())
    }

    #[test]
    fn register_attaches_then_replays_current_offset() {
        let mut fx = fixture();
        fx.host.scroll_to(0.0);
        let el = element("hero", 100.0, 50.0);

        let anim = fx
            .registry
            .register_scroll_react_animation(resource(&el, "recorder"))
            .unwrap();

        assert_eq!(anim.id(), "animation-registered-0");
        assert_eq!(
            events(&fx.journal),
            vec![
                ("hero".to_owned(), Event::Attached),
                (
                    "hero".to_owned(),
                    Event::Played {
                        offset: ResourceOffset { start: 80.0, end: 170.0 },
                        viewport: Viewport::new(320.0, 200.0),
                        scrolled: 0.0,
                        matched: true,
                    }
                ),
            ]
        );
        assert!(fx.registry.contains(anim.id()));
        assert_eq!(fx.registry.subscription_count(), 1);
    }

    #[test]
    fn late_registration_sees_offset_without_new_event() {
        let mut fx = fixture();
        let first = element("first", 0.0, 10.0);
        let _ = fx
            .registry
            .register_scroll_react_animation(resource(&first, "recorder"))
            .unwrap();
        fx.host.scroll_to(500.0);
        let _ = events(&fx.journal);

        let late = element("late", 600.0, 10.0);
        let _ = fx
            .registry
            .register_scroll_react_animation(resource(&late, "recorder"))
            .unwrap();
        let played: Vec<f64> = events(&fx.journal)
            .into_iter()
            .filter_map(|(_, e)| match e {
                Event::Played { scrolled, .. } => Some(scrolled),
                _ => None,
            })
            .collect();
        assert_eq!(played, vec![500.0]);
    }

    #[test]
    fn one_tick_fans_out_in_registration_order_with_shared_offset() {
        let mut fx = fixture();
        let near = element("near", 100.0, 50.0);
        let far = element("far", 2000.0, 50.0);
        let _ = fx
            .registry
            .register_scroll_react_animation(resource(&near, "recorder"))
            .unwrap();
        let _ = fx
            .registry
            .register_scroll_react_animation(resource(&far, "recorder"))
            .unwrap();
        let _ = events(&fx.journal);

        fx.host.scroll_to(40.0);
        let tick = events(&fx.journal);
        assert_eq!(tick.len(), 2);
        assert_eq!(tick[0].0, "near");
        assert_eq!(tick[1].0, "far");

        let Event::Played {
            viewport: v0,
            scrolled: s0,
            offset: o0,
            matched: m0,
        } = tick[0].1.clone()
        else {
            panic!("expected a play, got {:?}", tick[0]);
        };
        let Event::Played {
            viewport: v1,
            scrolled: s1,
            offset: o1,
            matched: m1,
        } = tick[1].1.clone()
        else {
            panic!("expected a play, got {:?}", tick[1]);
        };
        assert_eq!(v0, v1);
        assert_eq!(s0, 40.0);
        assert_eq!(s1, 40.0);
        assert_ne!(o0, o1);
        assert!(m0);
        assert!(!m1);
    }

    #[test]
    fn registrations_share_one_native_listener() {
        let mut fx = fixture();
        for i in 0..5 {
            let el = element(&format!("e{i}"), 0.0, 10.0);
            let _ = fx
                .registry
                .register_scroll_react_animation(resource(&el, "recorder"))
                .unwrap();
        }
        assert_eq!(fx.host.listener_count(), 1);
        assert_eq!(fx.registry.len(), 5);
    }

    #[test]
    fn unknown_behavior_fails_without_partial_state() {
        let mut fx = fixture();
        let el = element("", 0.0, 10.0);

        let err = fx
            .registry
            .register_scroll_react_animation(resource(&el, "missing"))
            .unwrap_err();

        assert!(matches!(
            err,
            FinnError::UnknownBehaviorId(ref id) if id == "missing"
        ));
        assert!(fx.registry.is_empty());
        assert_eq!(fx.registry.subscription_count(), 0);
        assert_eq!(fx.host.listener_count(), 0);
        assert_eq!(el.id(), "");
        assert!(events(&fx.journal).is_empty());

        // no id was consumed by the failed attempt
        let ok = fx
            .registry
            .register_scroll_react_animation(resource(&el, "recorder"))
            .unwrap();
        assert_eq!(ok.id(), "animation-registered-0");
    }

    #[test]
    fn element_without_id_receives_ref_id() {
        let mut fx = fixture();
        let anonymous = element("", 0.0, 10.0);
        let named = element("keep-me", 0.0, 10.0);

        let a = fx
            .registry
            .register_scroll_react_animation(resource(&anonymous, "recorder"))
            .unwrap();
        let b = fx
            .registry
            .register_scroll_react_animation(resource(&named, "recorder"))
            .unwrap();

        assert_eq!(anonymous.id(), a.id());
        assert_eq!(named.id(), "keep-me");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn unregister_detaches_and_stops_ticks() {
        let mut fx = fixture();
        let el = element("hero", 100.0, 50.0);
        let anim = fx
            .registry
            .register_scroll_react_animation(resource(&el, "recorder"))
            .unwrap();
        let _ = events(&fx.journal);

        fx.registry.unregister_animation(anim.id());
        assert_eq!(
            events(&fx.journal),
            vec![("hero".to_owned(), Event::Detached)]
        );
        assert!(!fx.registry.contains(anim.id()));
        assert_eq!(fx.registry.subscription_count(), 0);

        fx.host.scroll_to(300.0);
        assert!(events(&fx.journal).is_empty());
    }

    #[test]
    fn unregister_is_idempotent_and_ignores_unknown_ids() {
        let mut fx = fixture();
        let el = element("hero", 100.0, 50.0);
        let anim = fx
            .registry
            .register_scroll_react_animation(resource(&el, "recorder"))
            .unwrap();
        let _ = events(&fx.journal);

        fx.registry.unregister_animation(anim.id());
        fx.registry.unregister_animation(anim.id());
        fx.registry.unregister_animation("never-issued");

        assert_eq!(
            events(&fx.journal),
            vec![("hero".to_owned(), Event::Detached)]
        );
    }

    #[test]
    fn absent_hooks_are_fine() {
        let host = Rc::new(ManualScrollHost::new(Viewport::new(100.0, 100.0)));
        let mut registry = AnimationRegistry::new(host.clone());
        let _ = registry.set_animation_behavior("silent", factory::<Silent>());

        let el = element("s", 0.0, 10.0);
        let anim = registry
            .register_scroll_react_animation(resource(&el, "silent"))
            .unwrap();
        host.scroll_to(5.0);
        registry.unregister_animation(anim.id());
        assert!(registry.is_empty());
    }

    #[test]
    fn replacing_a_factory_keeps_existing_instances() {
        let mut fx = fixture();
        let el = element("hero", 100.0, 50.0);
        let anim = fx
            .registry
            .register_scroll_react_animation(resource(&el, "recorder"))
            .unwrap();
        let _ = fx
            .registry
            .set_animation_behavior("recorder", factory::<Silent>());
        let _ = events(&fx.journal);

        fx.host.scroll_to(10.0);
        assert_eq!(events(&fx.journal).len(), 1);
        assert!(fx.registry.contains(anim.id()));
        assert!(fx.registry.has_behavior("recorder"));
    }

    #[test]
    fn threshold_change_applies_on_next_tick() {
        let mut fx = fixture();
        let el = element("hero", 1000.0, 50.0);
        let res = resource(&el, "recorder");
        let _ = fx
            .registry
            .register_scroll_react_animation(Rc::clone(&res))
            .unwrap();
        let _ = events(&fx.journal);

        res.borrow_mut().threshold = 900.0;
        fx.host.scroll_to(0.0);
        let tick = events(&fx.journal);
        assert!(matches!(
            tick[0].1,
            Event::Played {
                matched: true,
                offset: ResourceOffset { start, .. },
                ..
            } if start == 100.0
        ));
    }

    #[test]
    fn destroy_detaches_in_order_and_releases_listener() {
        let mut fx = fixture();
        let a = element("a", 0.0, 10.0);
        let b = element("b", 0.0, 10.0);
        let _ = fx
            .registry
            .register_scroll_react_animation(resource(&a, "recorder"))
            .unwrap();
        let _ = fx
            .registry
            .register_scroll_react_animation(resource(&b, "recorder"))
            .unwrap();
        let _ = events(&fx.journal);

        fx.registry.destroy();
        assert_eq!(
            events(&fx.journal),
            vec![
                ("a".to_owned(), Event::Detached),
                ("b".to_owned(), Event::Detached),
            ]
        );
        assert!(fx.registry.is_empty());
        assert_eq!(fx.registry.subscription_count(), 0);
        assert!(!fx.registry.has_behavior("recorder"));
        assert_eq!(fx.host.listener_count(), 0);

        fx.host.scroll_to(50.0);
        assert!(events(&fx.journal).is_empty());
    }

    #[test]
    fn destroy_can_skip_detach_hooks() {
        let host = Rc::new(ManualScrollHost::new(Viewport::new(100.0, 100.0)));
        let options = RegistryOptions {
            detach_on_destroy: false,
            ..RegistryOptions::default()
        };
        let mut registry = AnimationRegistry::with_options(host, options);
        let _ = registry.set_animation_behavior("fly", factory::<FlyInOut>());

        let el = element("hero", 0.0, 10.0);
        let _ = registry
            .register_scroll_react_animation(resource(&el, "fly"))
            .unwrap();
        assert!(el.class_contains(BASE_CLASS_NAME));

        registry.destroy();
        assert!(el.class_contains(BASE_CLASS_NAME));
    }

    #[test]
    fn registry_is_reusable_after_destroy() {
        let mut fx = fixture();
        let el = element("a", 0.0, 10.0);
        let _ = fx
            .registry
            .register_scroll_react_animation(resource(&el, "recorder"))
            .unwrap();
        fx.registry.destroy();
        assert_eq!(fx.host.listener_count(), 0);

        let sink = Rc::clone(&fx.journal);
        let _ = fx.registry.set_animation_behavior(
            "recorder",
            Rc::new(move || -> Box<dyn AnimationBehavior> {
                Box::new(Recorder {
                    journal: Rc::clone(&sink),
                    resource: None,
                })
            }),
        );
        fx.host.scroll_to(70.0);
        let anim = fx
            .registry
            .register_scroll_react_animation(resource(&el, "recorder"))
            .unwrap();
        assert_eq!(fx.host.listener_count(), 1);
        // ids keep counting across destroy
        assert_eq!(anim.id(), "animation-registered-1");
        let last = events(&fx.journal).pop();
        assert!(matches!(
            last,
            Some((_, Event::Played { scrolled, .. })) if scrolled == 70.0
        ));
    }

    #[test]
    fn dropping_registry_releases_listener() {
        let host = Rc::new(ManualScrollHost::new(Viewport::new(100.0, 100.0)));
        {
            let mut registry = AnimationRegistry::new(host.clone());
            let _ = registry
                .set_animation_behavior("fly", factory::<FlyInOut>());
            let el = element("hero", 0.0, 10.0);
            let _ = registry
                .register_scroll_react_animation(resource(&el, "fly"))
                .unwrap();
            assert_eq!(host.listener_count(), 1);
        }
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn fly_in_out_end_to_end() {
        let host = Rc::new(ManualScrollHost::new(Viewport::new(800.0, 400.0)));
        let mut registry = AnimationRegistry::new(host.clone());
        let _ = registry.set_animation_behavior("fly", factory::<FlyInOut>());

        let el = element("card", 1000.0, 100.0);
        let anim = registry
            .register_scroll_react_animation(resource(&el, "fly"))
            .unwrap();
        assert!(el.class_contains(BASE_CLASS_NAME));
        assert!(!el.class_contains(ANIM_ACT_CLASS_NAME));

        host.scroll_to(800.0);
        assert!(el.class_contains(ANIM_ACT_CLASS_NAME));

        host.scroll_to(2000.0);
        assert!(!el.class_contains(ANIM_ACT_CLASS_NAME));

        registry.unregister_animation(anim.id());
        assert!(!el.class_contains(BASE_CLASS_NAME));
    }

    #[test]
    fn ids_follow_registration_order_and_prefix() {
        let host = Rc::new(ManualScrollHost::new(Viewport::new(100.0, 100.0)));
        let options = RegistryOptions {
            id_prefix: "anim-".into(),
            ..RegistryOptions::default()
        };
        let mut registry = AnimationRegistry::with_options(host, options);
        let _ = registry.set_animation_behavior("fly", factory::<FlyInOut>());

        let mut issued = Vec::new();
        for i in 0..3 {
            let el = element(&format!("e{i}"), 0.0, 10.0);
            issued.push(
                registry
                    .register_scroll_react_animation(resource(&el, "fly"))
                    .unwrap()
                    .id()
                    .to_owned(),
            );
        }
        registry.unregister_animation("anim-1");

        assert_eq!(issued, vec!["anim-0", "anim-1", "anim-2"]);
        assert_eq!(
            registry.ids().collect::<Vec<_>>(),
            vec!["anim-0", "anim-2"]
        );
    }

    #[test]
    fn id_generator_is_instance_scoped() {
        let mut a = IdGenerator::new("p-");
        let mut b = IdGenerator::new("p-");
        assert_eq!(a.next_id(), "p-0");
        assert_eq!(a.next_id(), "p-1");
        assert_eq!(b.next_id(), "p-0");
    }
}
