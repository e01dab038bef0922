// Copyright 2026 the Picview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use kurbo::{Affine, Point, Size, Vec2};
use log::{debug, trace, warn};
use picview_fit::{BaseTransform, ViewportFitter, ViewportFitterDebugInfo};
use picview_gesture::session::PanAccumulator;
use picview_gesture::{GestureHandler, GestureTransformEngine, ViewState};

use crate::event::{GestureEvent, GestureStatus};
use crate::picture::{Picture, PictureCanvas, PictureSource};

/// Callback invoked whenever the frame needs to be painted again.
pub type RepaintTrigger = Box<dyn FnMut()>;

/// A fixed viewport showing one picture that the user can pan, pinch-zoom
/// and double-tap to reset.
///
/// The frame wires the collaborators together:
/// - a [`PictureSource`] resolves the resource identifier into a picture,
/// - a [`ViewportFitter`] keeps the fit-to-viewport transform current,
/// - a [`GestureTransformEngine`] owns the user pan/zoom,
/// - a [`PictureCanvas`] receives the draw calls in [`paint`](Self::paint).
///
/// Changing the resource identifier reloads the picture and requests a
/// repaint; resizing rebuilds the base transform before anything else can
/// observe it.
pub struct InteractivePicture<S: PictureSource> {
    source: S,
    resource_id: Option<String>,
    picture: Option<S::Picture>,
    fitter: ViewportFitter,
    engine: GestureTransformEngine,
    pan_increments: PanAccumulator,
    repaint: Option<RepaintTrigger>,
    repaint_requests: u64,
}

impl<S: PictureSource> InteractivePicture<S> {
    /// Creates an empty frame of the given size, loading from `source`.
    pub fn new(source: S, viewport: Size) -> Self {
        Self {
            source,
            resource_id: None,
            picture: None,
            fitter: ViewportFitter::new(viewport),
            engine: GestureTransformEngine::new(),
            pan_increments: PanAccumulator::default(),
            repaint: None,
            repaint_requests: 0,
        }
    }

    /// Installs the repaint callback.
    #[must_use]
    pub fn with_repaint(mut self, repaint: impl FnMut() + 'static) -> Self {
        self.set_repaint(repaint);
        self
    }

    /// Replaces the repaint callback.
    pub fn set_repaint(&mut self, repaint: impl FnMut() + 'static) {
        self.repaint = Some(Box::new(repaint));
    }

    /// The picture source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the picture source, e.g. to register new resources.
    ///
    /// Call [`reload`](Self::reload) afterwards to pick up changes to the
    /// current resource.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Identifier of the picture being shown, if any.
    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    /// Sets the identifier of the picture to show.
    ///
    /// Empty identifiers count as `None`. If the value changed, the picture
    /// is reloaded and a repaint is requested; otherwise nothing happens.
    pub fn set_resource_id(&mut self, resource_id: Option<&str>) {
        let resource_id = resource_id.filter(|id| !id.is_empty());
        if self.resource_id.as_deref() == resource_id {
            return;
        }
        self.resource_id = resource_id.map(String::from);
        self.reload();
        self.request_repaint();
    }

    /// Loads the picture for the current identifier again.
    ///
    /// A failed load is logged and leaves the frame without a picture.
    /// The user pan/zoom is kept.
    pub fn reload(&mut self) {
        self.picture = match self.resource_id.as_deref() {
            None => None,
            Some(id) => match self.source.load(id) {
                Ok(picture) => {
                    debug!("loaded picture `{id}` with bounds {:?}", picture.bounds());
                    Some(picture)
                }
                Err(err) => {
                    warn!("failed to load picture `{id}`: {err}");
                    None
                }
            },
        };
        self.fitter
            .set_bounds(self.picture.as_ref().map(Picture::bounds));
        self.sync_base_transform();
    }

    /// The loaded picture, if any.
    pub fn picture(&self) -> Option<&S::Picture> {
        self.picture.as_ref()
    }

    /// Viewport size in device pixels.
    pub fn viewport(&self) -> Size {
        self.fitter.viewport()
    }

    /// Resizes the viewport. The base transform is rebuilt immediately.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.fitter.viewport() == viewport {
            return;
        }
        debug!("viewport resized to {}x{}", viewport.width, viewport.height);
        self.fitter.set_viewport(viewport);
        self.sync_base_transform();
        self.request_repaint();
    }

    /// Fit-to-viewport transform for the current picture and viewport.
    pub fn base_transform(&self) -> BaseTransform {
        self.fitter.base_transform()
    }

    /// Current user pan and zoom.
    pub fn view_state(&self) -> ViewState {
        self.engine.view_state()
    }

    /// The gesture engine.
    pub fn engine(&self) -> &GestureTransformEngine {
        &self.engine
    }

    /// Applies a gesture event.
    ///
    /// Returns `true` if the view state was updated, in which case a repaint
    /// has been requested.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> bool {
        trace!("gesture {event:?}");
        let changed = match event {
            GestureEvent::Pan { status, total } => match status {
                GestureStatus::Started => {
                    self.engine.handle_pan_start();
                    false
                }
                GestureStatus::Running => {
                    self.engine.handle_pan_update(total);
                    true
                }
                GestureStatus::Completed | GestureStatus::Canceled => {
                    self.engine.handle_pan_end();
                    false
                }
            },
            GestureEvent::Pinch {
                status: GestureStatus::Running,
                scale,
                origin,
            } => {
                let viewport = self.fitter.viewport();
                let origin = Point::new(origin.x * viewport.width, origin.y * viewport.height);
                self.engine.handle_pinch(scale, origin);
                true
            }
            GestureEvent::Pinch { .. } => false,
            GestureEvent::DoubleTap => {
                debug!("double tap: zoom to fit");
                self.engine.handle_double_tap();
                true
            }
        };
        if changed {
            self.request_repaint();
        }
        changed
    }

    /// Applies a pan event whose `delta` is relative to the previous event
    /// rather than to the start of the pan.
    ///
    /// A running delta that arrives without an incremental start begins a
    /// new pan at the current offset, so the view continues from wherever
    /// earlier events left it.
    pub fn handle_pan_increment(&mut self, status: GestureStatus, delta: Vec2) -> bool {
        match status {
            GestureStatus::Started => {
                self.pan_increments.start();
                self.handle_gesture(GestureEvent::pan(status, Vec2::ZERO))
            }
            GestureStatus::Running => {
                if !self.pan_increments.is_active() {
                    self.pan_increments.start();
                    self.engine.handle_pan_start();
                }
                let total = self.pan_increments.push(delta).unwrap_or(delta);
                self.handle_gesture(GestureEvent::pan(status, total))
            }
            GestureStatus::Completed | GestureStatus::Canceled => {
                let total = self.pan_increments.total().unwrap_or(Vec2::ZERO);
                self.pan_increments.end();
                self.handle_gesture(GestureEvent::pan(status, total))
            }
        }
    }

    /// Transform the picture should be drawn with, or `None` when there is
    /// nothing to draw.
    ///
    /// Nothing is drawn without a resource identifier, without a loaded
    /// picture, or when the picture's bounds are empty.
    pub fn render_transform(&self) -> Option<Affine> {
        if self.resource_id.is_none() || self.picture.is_none() || !self.fitter.can_fit() {
            return None;
        }
        Some(self.engine.render_transform())
    }

    /// Paints the frame: clears `canvas`, then draws the picture if there is one.
    ///
    /// Returns `true` if the picture was drawn.
    pub fn paint<C>(&mut self, canvas: &mut C) -> bool
    where
        C: PictureCanvas<S::Picture> + ?Sized,
    {
        canvas.clear();
        self.sync_base_transform();
        let Some(transform) = self.render_transform() else {
            return false;
        };
        let Some(picture) = self.picture.as_ref() else {
            return false;
        };
        canvas.draw_picture(picture, transform);
        true
    }

    /// Number of repaints requested so far.
    pub fn repaint_requests(&self) -> u64 {
        self.repaint_requests
    }

    /// Asks the host to paint again.
    pub fn request_repaint(&mut self) {
        self.repaint_requests += 1;
        if let Some(repaint) = self.repaint.as_mut() {
            repaint();
        }
    }

    /// Snapshot of the frame state for debugging and inspection.
    pub fn debug_info(&self) -> InteractivePictureDebugInfo {
        InteractivePictureDebugInfo {
            has_resource_id: self.resource_id.is_some(),
            has_picture: self.picture.is_some(),
            fitter: self.fitter.debug_info(),
            view_state: self.engine.view_state(),
            panning: self.engine.session().is_some(),
            render_transform: self.render_transform(),
            repaint_requests: self.repaint_requests,
        }
    }

    fn sync_base_transform(&mut self) {
        self.engine.set_base_transform(self.fitter.base_transform());
    }
}

impl<S> fmt::Debug for InteractivePicture<S>
where
    S: PictureSource + fmt::Debug,
    S::Picture: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractivePicture")
            .field("source", &self.source)
            .field("resource_id", &self.resource_id)
            .field("picture", &self.picture)
            .field("fitter", &self.fitter)
            .field("engine", &self.engine)
            .field("pan_increments", &self.pan_increments)
            .field("repaint_requests", &self.repaint_requests)
            .finish_non_exhaustive()
    }
}

/// Debug snapshot of an [`InteractivePicture`] state.
#[derive(Clone, Copy, Debug)]
pub struct InteractivePictureDebugInfo {
    /// Whether a resource identifier is set.
    pub has_resource_id: bool,
    /// Whether a picture is loaded.
    pub has_picture: bool,
    /// Fitter state, including the base transform.
    pub fitter: ViewportFitterDebugInfo,
    /// User pan and zoom.
    pub view_state: ViewState,
    /// Whether a pan is in progress.
    pub panning: bool,
    /// Transform the next paint would use.
    pub render_transform: Option<Affine>,
    /// Number of repaints requested so far.
    pub repaint_requests: u64,
}
