//! List command report data structures.

use serde::Serialize;

use super::output::{Output, Report};
use crate::artifact::ArtifactKind;

/// One scaffoldable artifact kind.
#[derive(Debug, Serialize)]
pub struct KindInfo {
    pub kind: ArtifactKind,
    pub class: &'static str,
    pub namespace: &'static str,
    pub description: &'static str,
}

impl From<ArtifactKind> for KindInfo {
    fn from(kind: ArtifactKind) -> Self {
        Self {
            kind,
            class: kind.class_pattern(),
            namespace: kind.namespace_suffix(),
            description: kind.description(),
        }
    }
}

/// Report data listing every artifact kind.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ListReport {
    pub kinds: Vec<KindInfo>,
}

impl ListReport {
    pub fn new() -> Self {
        Self {
            kinds: ArtifactKind::ALL.into_iter().map(KindInfo::from).collect(),
        }
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Artifacts");
        let width = self
            .kinds
            .iter()
            .map(|k| k.kind.name().len())
            .max()
            .unwrap_or(0);
        for info in &self.kinds {
            out.list_item(&format!(
                "{:width$}  {} ({}) - {}",
                info.kind.name(),
                info.class,
                info.namespace,
                info.description,
                width = width
            ));
        }
    }
}
