//! Movement domain: surface classification and contact reactions.

use bevy::prelude::*;

use crate::core::END_MENU_SCENE;
use crate::movement::locomotion::LocomotionState;

/// Semantic kind of a contacted surface, derived from its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneKind {
    Ground,
    Carousel,
    RedGreenZone,
    DeathZone,
    FinishLine,
    Other,
}

impl ZoneKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Ground" => ZoneKind::Ground,
            "Carousel" => ZoneKind::Carousel,
            "RedGreen" => ZoneKind::RedGreenZone,
            "Death" => ZoneKind::DeathZone,
            "FinishLine" => ZoneKind::FinishLine,
            _ => ZoneKind::Other,
        }
    }

    /// Surfaces the skater can stand on
    pub fn is_walkable(self) -> bool {
        matches!(
            self,
            ZoneKind::Ground | ZoneKind::Carousel | ZoneKind::RedGreenZone
        )
    }
}

/// Tag carried by every collider the skater can react to
#[derive(Component, Debug, Clone)]
pub struct SurfaceTag(pub String);

impl SurfaceTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn zone(&self) -> ZoneKind {
        ZoneKind::from_tag(&self.0)
    }
}

/// What the outside world has to do after a contact began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactReaction {
    Ignored,
    /// Landed on a Carousel or RedGreen surface
    Grounded(ZoneKind),
    /// Landed on plain ground; the red-green timer has to stop
    LandedOnGround,
    /// The skater is gone; a respawn has to be requested
    Died,
    /// The run is over; the end menu has to be loaded
    ReachedFinish,
}

/// Message a contact reaction sends to the run-level collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollaboratorRequest {
    Respawn,
    LoadScene(&'static str),
    StartRedGreen,
    StopRedGreen,
}

impl ContactReaction {
    pub fn request(self) -> Option<CollaboratorRequest> {
        match self {
            ContactReaction::Ignored => None,
            ContactReaction::Grounded(ZoneKind::RedGreenZone) => {
                Some(CollaboratorRequest::StartRedGreen)
            }
            ContactReaction::Grounded(_) => None,
            ContactReaction::LandedOnGround => Some(CollaboratorRequest::StopRedGreen),
            ContactReaction::Died => Some(CollaboratorRequest::Respawn),
            ContactReaction::ReachedFinish => Some(CollaboratorRequest::LoadScene(END_MENU_SCENE)),
        }
    }
}

impl LocomotionState {
    pub fn on_contact_begin(&mut self, zone: ZoneKind) -> ContactReaction {
        match zone {
            ZoneKind::Ground => {
                self.is_grounded = true;
                self.can_flip = true;
                self.has_jumped = false;
                ContactReaction::LandedOnGround
            }
            ZoneKind::Carousel | ZoneKind::RedGreenZone => {
                self.is_grounded = true;
                ContactReaction::Grounded(zone)
            }
            ZoneKind::DeathZone => ContactReaction::Died,
            ZoneKind::FinishLine => ContactReaction::ReachedFinish,
            ZoneKind::Other => ContactReaction::Ignored,
        }
    }
}
