// Copyright 2026 the Picview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits: where pictures come from and where they are drawn.

use alloc::string::{String, ToString};
use core::fmt::Display;

use hashbrown::HashMap;
use kurbo::{Affine, BezPath, Rect, Shape};

/// A decoded vector picture.
pub trait Picture {
    /// Bounding box of the picture in its own coordinate space.
    fn bounds(&self) -> Rect;
}

impl Picture for BezPath {
    fn bounds(&self) -> Rect {
        self.bounding_box()
    }
}

/// Loads pictures by resource identifier.
///
/// This is the image-loading collaborator: it owns whatever bundle, file
/// system or network access is needed to turn an identifier into a decoded
/// picture. The frame only ever asks it for one picture at a time.
pub trait PictureSource {
    /// Picture type produced by this source.
    type Picture: Picture;
    /// Error reported when a resource cannot be loaded.
    type Error: Display;

    /// Loads the picture registered under `resource_id`.
    fn load(&mut self, resource_id: &str) -> Result<Self::Picture, Self::Error>;
}

/// Drawing surface for a picture.
///
/// The frame calls [`clear`](Self::clear) once per paint and then, if there
/// is something to show, [`draw_picture`](Self::draw_picture) once.
pub trait PictureCanvas<P> {
    /// Clears the whole surface.
    fn clear(&mut self);
    /// Draws `picture` with `transform` mapping picture space to device pixels.
    fn draw_picture(&mut self, picture: &P, transform: Affine);
}

/// Error returned by [`MemoryPictureSource`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// Nothing is registered under the requested identifier.
    #[error("no picture registered under resource id `{0}`")]
    NotFound(String),
}

/// In-memory resource bundle mapping identifiers to pictures.
///
/// Loading hands out a clone of the stored picture, so pictures that are
/// expensive to clone should be wrapped in an `Arc`-like handle first.
#[derive(Clone, Debug)]
pub struct MemoryPictureSource<P> {
    pictures: HashMap<String, P>,
}

impl<P> MemoryPictureSource<P> {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pictures: HashMap::new(),
        }
    }

    /// Registers `picture` under `resource_id`, returning any picture it replaces.
    pub fn insert(&mut self, resource_id: impl Into<String>, picture: P) -> Option<P> {
        self.pictures.insert(resource_id.into(), picture)
    }

    /// Removes the picture registered under `resource_id`.
    pub fn remove(&mut self, resource_id: &str) -> Option<P> {
        self.pictures.remove(resource_id)
    }

    /// Returns `true` if something is registered under `resource_id`.
    #[must_use]
    pub fn contains(&self, resource_id: &str) -> bool {
        self.pictures.contains_key(resource_id)
    }

    /// Number of registered pictures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pictures.len()
    }

    /// Returns `true` if the bundle is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pictures.is_empty()
    }
}

impl<P> Default for MemoryPictureSource<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Picture + Clone> PictureSource for MemoryPictureSource<P> {
    type Picture = P;
    type Error = LoadError;

    fn load(&mut self, resource_id: &str) -> Result<P, LoadError> {
        self.pictures
            .get(resource_id)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(resource_id.to_string()))
    }
}
