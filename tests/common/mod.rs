//! Recording collaborators shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex, RwLock};

use stagehand::engine::{InstanceRegistry, ParentProject, SoundPlayer};
use stagehand::registry::InstanceList;
use stagehand::{Actor, ActorClass, ActorId, Appearance, Engine, LayerMove, Sound, Sprite};

/// A call made by an actor into one of its collaborators.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Touching { actor: ActorId, target: String },
    Register(ActorId),
    Unregister(ActorId),
    Layer { actor: ActorId, movement: LayerMove },
    Sound { actor: ActorId, sound: String, wait: bool },
}

/// Parent project and sound player that record every call.
///
/// Registration calls are applied to a shared [`InstanceList`], so instance
/// queries see clones and deletions.
#[derive(Default)]
pub struct Recorder {
    pub instances: Arc<RwLock<InstanceList>>,
    calls: Mutex<Vec<Call>>,
    touching: Mutex<HashSet<String>>,
}

impl Recorder {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Make touching tests against `class_name` report an overlap.
    pub fn set_touching(&self, class_name: &str) {
        self.touching.lock().unwrap().insert(class_name.to_string());
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ParentProject for Recorder {
    fn instance_is_touching_any_of(&self, instance: &Sprite, target: &ActorClass) -> bool {
        self.record(Call::Touching { actor: instance.id(), target: target.name().to_string() });
        self.touching.lock().unwrap().contains(target.name())
    }

    fn register_actor_instance(&self, instance: &Sprite) {
        self.record(Call::Register(instance.id()));
        self.instances.write().unwrap().register(instance.class(), instance.id());
    }

    fn unregister_actor_instance(&self, instance: &Sprite) {
        self.record(Call::Unregister(instance.id()));
        self.instances.write().unwrap().unregister(instance.class(), instance.id());
    }

    fn move_within_draw_layer_group(&self, instance: &Sprite, movement: LayerMove) {
        self.record(Call::Layer { actor: instance.id(), movement });
    }
}

impl SoundPlayer for Recorder {
    fn play_sound(&self, actor: ActorId, _class: &ActorClass, sound_name: &str, wait_until_done: bool) {
        self.record(Call::Sound { actor, sound: sound_name.to_string(), wait: wait_until_done });
    }
}

/// An engine whose collaborators all report to one recorder.
pub fn recording_engine() -> (Engine, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let instances: Arc<dyn InstanceRegistry> = recorder.instances.clone();
    let engine = Engine::new(recorder.clone(), instances, recorder.clone());
    (engine, recorder)
}

pub fn cat_class() -> Arc<ActorClass> {
    Arc::new(
        ActorClass::sprite(
            "Cat",
            vec![
                Appearance::new("idle", "cat-idle.png", 32, 32),
                Appearance::new("walk", "cat-walk.png", 32, 40),
            ],
        )
        .with_sounds(vec![Sound::new("meow", "meow.mp3")]),
    )
}

pub fn ghost_class() -> Arc<ActorClass> {
    Arc::new(ActorClass::sprite("Ghost", vec![]))
}

pub fn garden_class() -> Arc<ActorClass> {
    Arc::new(
        ActorClass::stage(
            "Garden",
            vec![
                Appearance::new("lawn", "lawn.png", 480, 360),
                Appearance::new("night", "night.png", 480, 360),
            ],
        )
        .with_sounds(vec![Sound::new("crickets", "crickets.mp3")]),
    )
}
