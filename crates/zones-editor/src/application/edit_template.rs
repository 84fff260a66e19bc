//! TemplateEditSession: edits one template of the catalog.
//!
//! A session starts from a snapshot of one catalog slot and keeps a working
//! copy.  Every setter range-checks its value against [`EditLimits`] and
//! leaves the working copy untouched on error.  Nothing reaches the catalog
//! until [`TemplateEditSession::save`]; [`TemplateEditSession::cancel`] simply
//! drops the working copy.
//!
//! # Typical flow (for beginners)
//!
//! ```text
//! open(catalog, Rows)      working = catalog[Rows]
//!  └─ set_zone_count(2)    working.zone_count = 2
//!  └─ set_spacing(10)      working.spacing = 10
//!  └─ save(&mut catalog)   catalog[Rows] = working
//! ```
//!
//! The caller decides when to persist the catalog after a save; see
//! `infrastructure::state::EditorState::save_template`.

use tracing::{debug, info};
use zones_core::{generate, LayoutDescriptor, LayoutKind, Rect, TemplateCatalog};

use super::EditorError;

/// Upper bounds for user-editable layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditLimits {
    pub max_zone_count: u32,
    pub max_spacing: u32,
    pub max_sensitivity_radius: u32,
}

impl Default for EditLimits {
    fn default() -> Self {
        Self {
            max_zone_count: 128,
            max_spacing: 1000,
            max_sensitivity_radius: 1000,
        }
    }
}

impl EditLimits {
    /// # Errors
    ///
    /// Returns [`EditorError::OutOfRange`] unless `1 <= count <= max_zone_count`.
    pub fn check_zone_count(&self, count: u32) -> Result<(), EditorError> {
        check_range("zone count", count, 1, self.max_zone_count)
    }

    /// # Errors
    ///
    /// Returns [`EditorError::OutOfRange`] above `max_spacing`.
    pub fn check_spacing(&self, spacing: u32) -> Result<(), EditorError> {
        check_range("spacing", spacing, 0, self.max_spacing)
    }

    /// # Errors
    ///
    /// Returns [`EditorError::OutOfRange`] above `max_sensitivity_radius`.
    pub fn check_sensitivity_radius(&self, radius: u32) -> Result<(), EditorError> {
        check_range("sensitivity radius", radius, 0, self.max_sensitivity_radius)
    }

    /// Checks a whole descriptor: its own invariants first, then the limits.
    /// An `Empty` layout has nothing to limit.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Layout`] or [`EditorError::OutOfRange`].
    pub fn check(&self, layout: &LayoutDescriptor) -> Result<(), EditorError> {
        layout.validate()?;
        if layout.kind == LayoutKind::Empty {
            return Ok(());
        }
        self.check_zone_count(layout.zone_count)?;
        self.check_spacing(layout.spacing)?;
        self.check_sensitivity_radius(layout.sensitivity_radius)
    }
}

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), EditorError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(EditorError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

// ── TemplateEditSession ───────────────────────────────────────────────────────

/// An in-progress edit of one catalog template.
#[derive(Debug, Clone)]
pub struct TemplateEditSession {
    original: LayoutDescriptor,
    working: LayoutDescriptor,
    limits: EditLimits,
}

impl TemplateEditSession {
    /// Opens a session on the `kind` slot of `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NotEditable`] for [`LayoutKind::Empty`].
    pub fn open(
        catalog: &TemplateCatalog,
        kind: LayoutKind,
        limits: EditLimits,
    ) -> Result<Self, EditorError> {
        if kind == LayoutKind::Empty {
            return Err(EditorError::NotEditable(kind));
        }
        let original = catalog.get(kind).clone();
        debug!(%kind, "opened template edit session");
        Ok(Self {
            working: original.clone(),
            original,
            limits,
        })
    }

    pub fn kind(&self) -> LayoutKind {
        self.working.kind
    }

    /// The descriptor as it would be saved right now.
    pub fn working(&self) -> &LayoutDescriptor {
        &self.working
    }

    /// `true` once any parameter differs from the catalog snapshot.
    pub fn is_modified(&self) -> bool {
        self.working != self.original
    }

    /// # Errors
    ///
    /// Returns [`EditorError::OutOfRange`] for 0 or counts above the limit.
    pub fn set_zone_count(&mut self, count: u32) -> Result<(), EditorError> {
        self.limits.check_zone_count(count)?;
        self.working.zone_count = count;
        Ok(())
    }

    /// Sets the gutter width.  The value is kept even while spacing is hidden.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OutOfRange`] above the limit.
    pub fn set_spacing(&mut self, spacing: u32) -> Result<(), EditorError> {
        self.limits.check_spacing(spacing)?;
        self.working.spacing = spacing;
        Ok(())
    }

    pub fn set_show_spacing(&mut self, show: bool) {
        self.working.show_spacing = show;
    }

    /// # Errors
    ///
    /// Returns [`EditorError::OutOfRange`] above the limit.
    pub fn set_sensitivity_radius(&mut self, radius: u32) -> Result<(), EditorError> {
        self.limits.check_sensitivity_radius(radius)?;
        self.working.sensitivity_radius = radius;
        Ok(())
    }

    /// Zones of the working copy inside `work_area`, for the editor preview.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Zone`] if the zones cannot be generated.
    pub fn preview(&self, work_area: Rect) -> Result<Vec<Rect>, EditorError> {
        Ok(generate(&self.working, work_area)?)
    }

    /// Commits the working copy into `catalog` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Table`] if the catalog rejects the descriptor.
    pub fn save(self, catalog: &mut TemplateCatalog) -> Result<LayoutDescriptor, EditorError> {
        catalog.upsert(self.working.kind, self.working.clone())?;
        info!(
            kind = %self.working.kind,
            zones = self.working.zone_count,
            show_spacing = self.working.show_spacing,
            spacing = self.working.spacing,
            sensitivity_radius = self.working.sensitivity_radius,
            "template saved"
        );
        Ok(self.working)
    }

    /// Discards the working copy, returning the unchanged snapshot.
    pub fn cancel(self) -> LayoutDescriptor {
        debug!(kind = %self.original.kind, modified = self.is_modified(), "template edit cancelled");
        self.original
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
