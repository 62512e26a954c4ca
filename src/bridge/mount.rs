//! Minimal stand-in for the host's sheet container.

/// The kind of element a mount target represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountKind {
    Form,
    Other,
}

/// A single mountable element inside a sheet container.
#[derive(Debug, Clone)]
pub struct MountTarget {
    kind: MountKind,
    label: String,
}

impl MountTarget {
    pub fn form(label: impl Into<String>) -> Self {
        Self {
            kind: MountKind::Form,
            label: label.into(),
        }
    }

    pub fn other(label: impl Into<String>) -> Self {
        Self {
            kind: MountKind::Other,
            label: label.into(),
        }
    }

    pub fn kind(&self) -> MountKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The container a sheet render hands to [`crate::bridge::bind`].
///
/// Host convention puts one form in every sheet render; the bridge mounts
/// at the first form it finds and treats a formless container as a
/// configuration error.
#[derive(Debug, Clone, Default)]
pub struct MountRegion {
    targets: Vec<MountTarget>,
}

impl MountRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, target: MountTarget) {
        self.targets.push(target);
    }

    pub fn with_target(mut self, target: MountTarget) -> Self {
        self.targets.push(target);
        self
    }

    pub(crate) fn first_form(&self) -> Option<&MountTarget> {
        self.targets
            .iter()
            .find(|target| target.kind() == MountKind::Form)
    }
}
