// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The presentation lifecycle state machine.

use core::fmt;
use core::time::Duration;
use std::rc::Rc;

use kurbo::{Affine, Point, Rect, Size};
use scrimshaw_compose::{ComposedLayout, ComposerModel, ContentComposer};
use scrimshaw_config::{ModalConfig, ModalTheme};
use scrimshaw_diff::Invalidation;
use scrimshaw_gesture::{
    DismissGestureInterpreter, GestureSample, REBOUND_DURATION, ReleaseDecision, SheetDragPolicy,
};
use scrimshaw_overlay::{OverlayScrim, TapOutcome};
use tracing::{debug, trace, warn};

use crate::handle::Mailbox;
use crate::{
    DismissHandle, Easing, PresentError, PresentationEvent, PresentationState, Sections,
    SheetFrame, Strategy, Transition, Visual,
};

const APPEAR_EASING: Easing = Easing::EaseOut;
const DISAPPEAR_EASING: Easing = Easing::EaseIn;
const REBOUND_EASING: Easing = Easing::EaseOut;

/// Where a tap delivered to a presentation ended up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TapRoute {
    /// The tap landed on the content container; route it to the content.
    Content,
    /// The tap landed on the scrim and started an animated dismissal.
    Dismiss,
    /// The tap landed on the scrim and was swallowed.
    Absorbed,
    /// Nothing of the presentation was hit.
    PassThrough,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Appear,
    Rebound,
    Disappear,
}

#[derive(Copy, Clone, Debug)]
struct Animation {
    phase: Phase,
    transition: Transition,
}

/// Owns one presentation from construction to teardown.
///
/// The controller is driven entirely by its host: lifecycle calls
/// ([`present`](Self::present), [`dismiss`](Self::dismiss)), input
/// ([`tap`](Self::tap) and the `drag_*` family), the clock
/// ([`tick`](Self::tick)), and viewport changes. After each call the host
/// draws [`frame`](Self::frame) and may [`drain_events`](Self::drain_events).
///
/// Transitions never run concurrently: starting a new one replaces the one in
/// flight, continuing from the live visual.
pub struct PresentationController {
    config: ModalConfig,
    strategy: Strategy,
    corner_radius: f64,
    state: PresentationState,
    viewport: Size,
    composer: ContentComposer,
    scrim: OverlayScrim,
    gesture: Option<DismissGestureInterpreter>,
    dragging: bool,
    visual: Visual,
    animation: Option<Animation>,
    completions: Vec<Box<dyn FnOnce()>>,
    events: Vec<PresentationEvent>,
    mailbox: Rc<Mailbox>,
}

impl fmt::Debug for PresentationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationController")
            .field("state", &self.state)
            .field("strategy", &self.strategy)
            .field("viewport", &self.viewport)
            .field("visual", &self.visual)
            .field("dragging", &self.dragging)
            .field("animation", &self.animation)
            .field("pending_completions", &self.completions.len())
            .field("composer", &self.composer)
            .finish_non_exhaustive()
    }
}

/// Builds a controller and starts its appear transition.
///
/// Equivalent to [`PresentationController::new`] followed by
/// [`PresentationController::present`].
pub fn present(
    config: ModalConfig,
    theme: &ModalTheme,
    viewport: Size,
    sections: Sections,
) -> Result<PresentationController, PresentError> {
    let mut controller = PresentationController::new(config, theme, viewport, sections)?;
    controller.present();
    Ok(controller)
}

impl PresentationController {
    /// Builds the scrim and content for `config`, in [`PresentationState::Initial`].
    ///
    /// Each content factory in `sections` is called once, here.
    pub fn new(
        config: ModalConfig,
        theme: &ModalTheme,
        viewport: Size,
        sections: Sections,
    ) -> Result<Self, PresentError> {
        let mailbox = Rc::new(Mailbox::default());
        let built = sections.build(&DismissHandle::new(&mailbox));
        let composer = ContentComposer::new(
            ComposerModel::from_config(&config, theme, viewport),
            built.header,
            built.body,
            built.footer,
        )?;
        let scrim = OverlayScrim::new(&config, theme, Rect::from_origin_size(Point::ZERO, viewport));
        let strategy = Strategy::from(config.placement());
        let gesture = config
            .placement()
            .sheet()
            .filter(|options| options.tracks_drags())
            .map(|options| {
                DismissGestureInterpreter::new(SheetDragPolicy {
                    is_draggable: options.is_draggable,
                    hides_on_swap: options.hides_on_swap,
                })
            });
        debug!(?strategy, ?viewport, tracks_drags = gesture.is_some(), "presentation built");
        Ok(Self {
            corner_radius: theme.corner_radius(config.corner_radius()),
            config,
            strategy,
            state: PresentationState::Initial,
            viewport,
            composer,
            scrim,
            gesture,
            dragging: false,
            visual: strategy.entry(viewport),
            animation: None,
            completions: Vec::new(),
            events: Vec::new(),
            mailbox,
        })
    }

    /// Starts the appear transition. A no-op unless the state is `Initial`.
    pub fn present(&mut self) {
        self.process_requests();
        if self.state != PresentationState::Initial {
            trace!(state = ?self.state, "present ignored");
            return;
        }
        self.set_state(PresentationState::Appearing);
        self.animate(
            Phase::Appear,
            self.strategy.rest(),
            APPEAR_EASING,
            self.config.transition_duration(),
        );
    }

    /// Requests dismissal.
    ///
    /// Idempotent: once disappearing or dismissed, further calls have no
    /// effect. Before [`present`](Self::present) it is a no-op. With
    /// `animated == false` the presentation reaches `Dismissed` before this
    /// returns, passing through `Disappearing`.
    pub fn dismiss(&mut self, animated: bool) {
        self.process_requests();
        self.request_dismiss(animated, None);
    }

    /// Like [`dismiss`](Self::dismiss), then calls `completion`.
    ///
    /// `completion` runs once the presentation is dismissed, even when this
    /// call itself had no effect. If it is already dismissed (or was never
    /// presented) `completion` runs before this returns.
    pub fn dismiss_with(&mut self, animated: bool, completion: impl FnOnce() + 'static) {
        self.process_requests();
        self.request_dismiss(animated, Some(Box::new(completion)));
    }

    /// Processes dismiss requests queued through [`DismissHandle`]s.
    ///
    /// Every other entry point does this first; hosts only need it when they
    /// want requests handled without input or a clock tick.
    pub fn pump(&mut self) {
        self.process_requests();
    }

    /// Advances the running transition by `dt`.
    ///
    /// Returns `true` while a transition is still running, meaning the host
    /// should schedule another frame.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.process_requests();
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        self.visual = animation.transition.tick(dt);
        let finished = animation.transition.is_finished();
        trace!(
            phase = ?animation.phase,
            progress = animation.transition.progress(),
            "transition tick"
        );
        if finished {
            self.finish_animation();
        }
        self.animation.is_some()
    }

    /// Starts a drag session on the content.
    ///
    /// Accepted only for a bottom sheet that tracks drags, at rest in
    /// `Presented`. A second concurrent drag is ignored. Returns whether the
    /// drag was accepted.
    ///
    /// The touch-down is the drag's first sample: an accepted drag moves the
    /// presentation to `Interacting` here, before any
    /// [`drag_changed`](Self::drag_changed). A drag released without moving
    /// therefore still resolves through a rebound.
    pub fn drag_began(&mut self) -> bool {
        self.process_requests();
        if self.dragging {
            warn!("drag began while another drag is active; ignored");
            return false;
        }
        let Some(gesture) = self.gesture.as_mut() else {
            trace!("drag ignored: presentation does not track drags");
            return false;
        };
        if self.state != PresentationState::Presented {
            trace!(state = ?self.state, "drag ignored");
            return false;
        }
        gesture.reset();
        self.dragging = true;
        self.set_state(PresentationState::Interacting);
        true
    }

    /// Feeds a sample of the active drag. Returns whether it was applied.
    pub fn drag_changed(&mut self, sample: GestureSample) -> bool {
        self.process_requests();
        if !self.dragging {
            return false;
        }
        let Some(gesture) = self.gesture.as_mut() else {
            return false;
        };
        let offset = gesture.update(sample);
        self.visual = self.strategy.dragged(offset);
        trace!(translation = sample.translation, offset, "drag changed");
        true
    }

    /// Ends the active drag with its final sample and resolves it.
    ///
    /// Returns the decision, or `None` if no drag was active.
    pub fn drag_ended(&mut self, sample: GestureSample) -> Option<ReleaseDecision> {
        self.process_requests();
        if !self.dragging {
            return None;
        }
        let height = self.composer.layout().container.height();
        let gesture = self.gesture.as_mut()?;
        let decision = gesture.release(sample, height);
        self.visual = self.strategy.dragged(gesture.offset());
        self.resolve_drag(decision);
        Some(decision)
    }

    /// Cancels the active drag; the content always springs back.
    ///
    /// Returns the decision, or `None` if no drag was active.
    pub fn drag_cancelled(&mut self) -> Option<ReleaseDecision> {
        self.process_requests();
        if !self.dragging {
            return None;
        }
        let decision = self.gesture.as_mut()?.cancel();
        self.resolve_drag(decision);
        Some(decision)
    }

    /// Delivers a tap at `point`, in viewport coordinates.
    ///
    /// Taps on the content are routed to it. Taps on the scrim dismiss when
    /// the config allows it and the presentation is at rest; otherwise they
    /// are absorbed, so nothing behind the scrim receives them.
    pub fn tap(&mut self, point: Point) -> TapRoute {
        self.process_requests();
        if !self.state.is_visible() {
            return TapRoute::PassThrough;
        }
        if self.content_hit(point) {
            return TapRoute::Content;
        }
        match self.scrim.tap(point) {
            TapOutcome::PassThrough => TapRoute::PassThrough,
            TapOutcome::Absorbed => TapRoute::Absorbed,
            TapOutcome::Dismiss if self.state == PresentationState::Presented => {
                debug!("overlay tapped");
                self.request_dismiss(true, None);
                TapRoute::Dismiss
            }
            TapOutcome::Dismiss => {
                trace!(state = ?self.state, "overlay tap absorbed");
                TapRoute::Absorbed
            }
        }
    }

    /// Resizes the presentation to a new viewport.
    ///
    /// Returns the layout work the change required.
    pub fn set_viewport(&mut self, viewport: Size) -> Result<Invalidation, PresentError> {
        self.process_requests();
        self.viewport = viewport;
        self.scrim
            .set_bounds(Rect::from_origin_size(Point::ZERO, viewport));
        if self.state == PresentationState::Initial {
            self.visual = self.strategy.entry(viewport);
        }
        let model = ComposerModel {
            viewport,
            ..self.composer.model().clone()
        };
        let invalidation = self.composer.update(model)?;
        debug!(?viewport, ?invalidation, "viewport changed");
        Ok(invalidation)
    }

    /// Re-measures the sections after their content changed size.
    pub fn invalidate_content(&mut self) -> Result<Invalidation, PresentError> {
        self.process_requests();
        Ok(self.composer.invalidate_content()?)
    }

    /// Describes the current frame for a backend.
    #[must_use]
    pub fn frame(&self) -> SheetFrame {
        let layout = self.composer.layout();
        SheetFrame {
            state: self.state,
            scrim: self.scrim.fill(self.visual.scrim_progress),
            scrim_bounds: self.scrim.bounds(),
            container: layout.container,
            header: layout.header,
            body: layout.body,
            footer: layout.footer,
            body_scrolls: layout.body_scrolls(),
            transform: self.content_transform(),
            content_alpha: self.visual.alpha,
            corner_radii: self.strategy.corner_radii(self.corner_radius),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    /// The config this presentation was built with.
    #[must_use]
    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    /// The variant strategy.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The live visual.
    #[must_use]
    pub fn visual(&self) -> Visual {
        self.visual
    }

    /// Section layout at rest.
    #[must_use]
    pub fn layout(&self) -> &ComposedLayout {
        self.composer.layout()
    }

    /// Whether a transition is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// A new handle for requesting dismissal from outside.
    #[must_use]
    pub fn dismiss_handle(&self) -> DismissHandle {
        DismissHandle::new(&self.mailbox)
    }

    /// Takes the events recorded since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<PresentationEvent> {
        core::mem::take(&mut self.events)
    }

    fn process_requests(&mut self) {
        for animated in self.mailbox.take() {
            debug!(animated, "dismiss requested through handle");
            self.request_dismiss(animated, None);
        }
    }

    fn request_dismiss(&mut self, animated: bool, completion: Option<Box<dyn FnOnce()>>) {
        match self.state {
            PresentationState::Initial | PresentationState::Dismissed => {
                trace!(state = ?self.state, "dismiss ignored");
                if let Some(completion) = completion {
                    completion();
                }
            }
            PresentationState::Disappearing => {
                trace!("dismiss already in progress");
                self.completions.extend(completion);
            }
            PresentationState::Appearing
            | PresentationState::Presented
            | PresentationState::Interacting => {
                self.completions.extend(completion);
                if self.dragging {
                    debug!("dismiss ends active drag");
                    self.end_drag_session();
                }
                self.set_state(PresentationState::Disappearing);
                let duration = if animated {
                    self.config.transition_duration()
                } else {
                    Duration::ZERO
                };
                self.animate(
                    Phase::Disappear,
                    self.strategy.exit(self.viewport),
                    DISAPPEAR_EASING,
                    duration,
                );
            }
        }
    }

    fn resolve_drag(&mut self, decision: ReleaseDecision) {
        self.end_drag_session();
        debug!(?decision, offset = self.visual.offset_y, "drag resolved");
        self.events.push(PresentationEvent::DragResolved(decision));
        match decision {
            ReleaseDecision::Commit => self.request_dismiss(true, None),
            ReleaseDecision::Rebound => self.animate(
                Phase::Rebound,
                self.strategy.rest(),
                REBOUND_EASING,
                REBOUND_DURATION,
            ),
        }
    }

    fn end_drag_session(&mut self) {
        self.dragging = false;
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.reset();
        }
    }

    /// Replaces any running transition with one from the live visual.
    fn animate(&mut self, phase: Phase, target: Visual, easing: Easing, duration: Duration) {
        if let Some(interrupted) = self.animation.take() {
            trace!(phase = ?interrupted.phase, "transition interrupted");
        }
        let transition = Transition::new(self.visual, target, duration, easing);
        self.animation = Some(Animation { phase, transition });
        if transition.is_finished() {
            self.finish_animation();
        }
    }

    fn finish_animation(&mut self) {
        let Some(animation) = self.animation.take() else {
            return;
        };
        self.visual = animation.transition.target();
        match animation.phase {
            Phase::Appear | Phase::Rebound => self.set_state(PresentationState::Presented),
            Phase::Disappear => {
                self.set_state(PresentationState::Dismissed);
                for completion in core::mem::take(&mut self.completions) {
                    completion();
                }
            }
        }
    }

    fn set_state(&mut self, to: PresentationState) {
        let from = self.state;
        if from == to {
            return;
        }
        debug!(?from, ?to, "presentation state changed");
        self.state = to;
        self.events
            .push(PresentationEvent::StateChanged { from, to });
    }

    fn content_transform(&self) -> Affine {
        let center = self.composer.layout().container.center();
        Affine::translate((0.0, self.visual.offset_y))
            * Affine::scale_about(self.visual.scale, center)
    }

    fn content_hit(&self, point: Point) -> bool {
        self.visual.alpha > 0.0
            && self.visual.scale > 0.0
            && self
                .content_transform()
                .transform_rect_bbox(self.composer.layout().container)
                .contains(point)
    }
}
