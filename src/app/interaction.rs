// Hover interaction and render model
//
// Tracks the single hovered location and derives the per-node and
// per-connection emphasis flags handed to the presentation layer.
//
// Hover-leave uses a guarded clear: a leave only clears the selection when
// it names the location currently hovered. A late leave from a previously
// hovered node therefore never clears a newer hover.

use crate::metrics::LiveMetrics;
use crate::registry::{Location, LocationRegistry};

/// Currently hovered location, keyed by its unique name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interaction {
    hovered: Option<String>,
}

/// Per-location render attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeView<'a> {
    pub location: &'a Location,
    /// Hovered, or the headquarters node
    pub active: bool,
    pub hovered: bool,
}

/// Headquarters to regional office connection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionView<'a> {
    pub from: &'a Location,
    pub to: &'a Location,
    /// Emphasized while the regional end is hovered
    pub active: bool,
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel<'a> {
    pub nodes: Vec<NodeView<'a>>,
    pub connections: Vec<ConnectionView<'a>>,
    pub hovered: Option<&'a Location>,
    pub metrics: LiveMetrics,
}

impl<'a> RenderModel<'a> {
    pub fn active_connection_count(&self) -> usize {
        self.connections.iter().filter(|c| c.active).count()
    }
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hover `location`, replacing any previous hover
    ///
    /// Returns true if the selection changed.
    pub fn on_hover_enter(&mut self, location: &Location) -> bool {
        if self.is_hovered(location) {
            return false;
        }
        self.hovered = Some(location.name.clone());
        tracing::debug!(location = %location.name, "Hover enter");
        true
    }

    /// Clear the hover if `location` is the one currently hovered
    ///
    /// Returns true if the selection was cleared.
    pub fn on_hover_leave(&mut self, location: &Location) -> bool {
        if !self.is_hovered(location) {
            tracing::debug!(location = %location.name, "Ignoring stale hover leave");
            return false;
        }
        self.hovered = None;
        tracing::debug!(location = %location.name, "Hover leave");
        true
    }

    /// Drop any hover (used on unmount)
    pub fn clear(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn is_hovered(&self, location: &Location) -> bool {
        self.hovered.as_deref() == Some(location.name.as_str())
    }

    /// Headquarters is always active; anything else only while hovered
    pub fn is_active(&self, location: &Location) -> bool {
        location.is_headquarters() || self.is_hovered(location)
    }

    /// Whether the connection to a regional office is emphasized
    pub fn connection_active(&self, location: &Location) -> bool {
        location.is_regional() && self.is_hovered(location)
    }

    /// Derive the render model from the registry and current metrics
    pub fn render_model<'a>(
        &self,
        registry: &'a LocationRegistry,
        metrics: LiveMetrics,
    ) -> RenderModel<'a> {
        let nodes = registry
            .iter()
            .map(|location| NodeView {
                location,
                active: self.is_active(location),
                hovered: self.is_hovered(location),
            })
            .collect();

        let connections = registry
            .connections()
            .map(|(from, to)| ConnectionView {
                from,
                to,
                active: self.connection_active(to),
            })
            .collect();

        let hovered = self.hovered.as_deref().and_then(|name| registry.get(name));

        RenderModel {
            nodes,
            connections,
            hovered,
            metrics,
        }
    }
}
