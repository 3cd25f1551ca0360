//! Sprites: movable, cloneable actors.

use std::sync::Arc;

use crate::engine::{ActorId, Engine, LayerMove};
use crate::models::{ActorClass, ActorKind};

use super::{check_kind, Actor, ActorError, AppearanceHolder};

/// A live instance of a sprite class.
///
/// Position and size are plain numbers with no bounds. Anything involving
/// other actors (touching, draw order, deletion, instance queries) is
/// forwarded to the [`Engine`] collaborators.
#[derive(Debug)]
pub struct Sprite {
    id: ActorId,
    holder: AppearanceHolder,
    x: f64,
    y: f64,
    size: f64,
    shown: bool,
    engine: Engine,
}

impl Sprite {
    /// Create a hidden sprite at the origin wearing its class's first costume.
    ///
    /// A class with no costumes is allowed; such a sprite has no appearance
    /// and can never be shown.
    pub fn new(class: Arc<ActorClass>, engine: Engine) -> Result<Self, ActorError> {
        check_kind(&class, ActorKind::Sprite)?;

        let first = class.first_appearance().map(|costume| costume.label.clone());
        let mut sprite = Self {
            id: ActorId::next(),
            holder: AppearanceHolder::unset(class),
            x: 0.0,
            y: 0.0,
            size: 1.0,
            shown: false,
            engine,
        };
        if let Some(label) = first {
            sprite.switch_costume(&label)?;
        }

        tracing::debug!(sprite = %sprite.id, class = %sprite.holder.class().name(), "created sprite");
        Ok(sprite)
    }

    pub fn switch_costume(&mut self, costume_name: &str) -> Result<(), ActorError> {
        self.switch_appearance(costume_name)
    }

    // Instance queries

    /// The first registered instance of this sprite's class.
    pub fn the_original(&self) -> Option<ActorId> {
        self.all_instances().into_iter().next()
    }

    /// Every instance of this sprite's class except the original.
    pub fn all_clones(&self) -> Vec<ActorId> {
        self.all_instances().into_iter().skip(1).collect()
    }

    /// Every live instance of this sprite's class, in registration order.
    pub fn all_instances(&self) -> Vec<ActorId> {
        self.engine.instances().registered_instances(self.holder.class())
    }

    // Position and size

    pub fn go_to_xy(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn change_x(&mut self, dx: f64) {
        self.x += dx;
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn change_y(&mut self, dy: f64) {
        self.y += dy;
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Set the scale factor. Any value is accepted, including zero or negative.
    pub fn set_size(&mut self, size: f64) {
        self.size = size;
    }

    // Visibility

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn show(&mut self) -> Result<(), ActorError> {
        let class = self.holder.class();
        if class.appearances().is_empty() {
            tracing::warn!(sprite = %self.id, class = %class.name(), "cannot show sprite without costumes");
            return Err(ActorError::CannotShow { class: class.name().to_string() });
        }
        self.shown = true;
        Ok(())
    }

    pub fn hide(&mut self) {
        self.shown = false;
    }

    // Interaction with other actors

    /// Whether this sprite overlaps any live instance of `target_class`.
    pub fn touching(&self, target_class: &ActorClass) -> bool {
        self.engine.project().instance_is_touching_any_of(self, target_class)
    }

    /// Make a copy of this sprite and register it with the project.
    ///
    /// The clone starts with the same appearance, position, size and
    /// visibility, under a fresh identity.
    pub fn create_clone(&self) -> Sprite {
        let clone = Sprite {
            id: ActorId::next(),
            holder: self.holder.clone(),
            x: self.x,
            y: self.y,
            size: self.size,
            shown: self.shown,
            engine: self.engine.clone(),
        };
        tracing::debug!(original = %self.id, clone = %clone.id, "create clone");
        self.engine.project().register_actor_instance(&clone);
        clone
    }

    /// Remove this instance from the project.
    pub fn delete_this_clone(&self) {
        tracing::debug!(sprite = %self.id, "delete clone");
        self.engine.project().unregister_actor_instance(self);
    }

    // Draw layers

    pub fn move_to_front_layer(&self) {
        self.move_within_draw_layer_group(LayerMove::FRONT);
    }

    pub fn move_to_back_layer(&self) {
        self.move_within_draw_layer_group(LayerMove::BACK);
    }

    pub fn move_forward_layers(&self, n_layers: i64) {
        self.move_within_draw_layer_group(LayerMove::Relative(n_layers));
    }

    pub fn move_backward_layers(&self, n_layers: i64) {
        self.move_within_draw_layer_group(LayerMove::Relative(n_layers.saturating_neg()));
    }

    fn move_within_draw_layer_group(&self, movement: LayerMove) {
        tracing::debug!(sprite = %self.id, ?movement, "move within draw layers");
        self.engine.project().move_within_draw_layer_group(self, movement);
    }
}

impl Actor for Sprite {
    fn id(&self) -> ActorId {
        self.id
    }

    fn appearance_holder(&self) -> &AppearanceHolder {
        &self.holder
    }

    fn appearance_holder_mut(&mut self) -> &mut AppearanceHolder {
        &mut self.holder
    }

    fn engine(&self) -> &Engine {
        &self.engine
    }
}
