//! Messages connecting the creation session, the catalog and the UI.
//!
//! Each message has exactly one consumer.

use bevy::prelude::*;

use crate::creation::CancelReason;
use crate::shapes::{ShapeDescriptor, ShapeKind};

/// A shape was completed; the catalog stores it
#[derive(Message, Debug, Clone)]
pub struct ShapeFinalized {
    pub descriptor: ShapeDescriptor,
}

/// The in-progress drawing (or armed mode) was dropped; the toolbar reports it
#[derive(Message, Debug, Clone, Copy)]
pub struct CreationCancelled {
    pub reason: CancelReason,
}

/// Toolbar button or shortcut for a shape mode
#[derive(Message, Debug, Clone, Copy)]
pub struct ToggleModeRequest {
    pub mode: ShapeKind,
}

/// Escape key or toolbar cancel
#[derive(Message, Debug, Clone, Copy)]
pub struct CancelCreationRequest;

/// Delete button in the shape list or inspector
#[derive(Message, Debug, Clone, Copy)]
pub struct DeleteShapeRequest {
    pub index: usize,
}
