//! The stage: the single, always-visible backdrop holder.

use std::sync::Arc;

use crate::engine::{ActorId, Engine};
use crate::models::{ActorClass, ActorKind};

use super::{check_kind, Actor, ActorError, AppearanceHolder};

/// A live instance of a stage class.
///
/// The stage sits at the origin at normal size and is always shown. It has no
/// "no appearance" state, so its class must declare at least one backdrop.
#[derive(Debug)]
pub struct Stage {
    id: ActorId,
    holder: AppearanceHolder,
    engine: Engine,
}

impl Stage {
    /// Create the stage showing its class's first backdrop.
    pub fn new(class: Arc<ActorClass>, engine: Engine) -> Result<Self, ActorError> {
        check_kind(&class, ActorKind::Stage)?;

        let Some(first) = class.first_appearance().map(|backdrop| backdrop.label.clone()) else {
            return Err(ActorError::EmptyBackdropSet { class: class.name().to_string() });
        };

        let mut stage = Self { id: ActorId::next(), holder: AppearanceHolder::unset(class), engine };
        stage.switch_backdrop(&first)?;
        Ok(stage)
    }

    pub fn switch_backdrop(&mut self, backdrop_name: &str) -> Result<(), ActorError> {
        self.switch_appearance(backdrop_name)
    }

    /// The registered instance of this stage's class.
    pub fn the_only(&self) -> Option<ActorId> {
        self.engine.instances().registered_instances(self.holder.class()).into_iter().next()
    }

    pub fn x(&self) -> f64 {
        0.0
    }

    pub fn y(&self) -> f64 {
        0.0
    }

    pub fn size(&self) -> f64 {
        1.0
    }

    pub fn is_shown(&self) -> bool {
        true
    }
}

impl Actor for Stage {
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
