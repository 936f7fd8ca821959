//! Page layout: turning a list of text items into drawable shapes and text
//!
//! This module is organized into submodules:
//! - `types`: placements, colors, and the [`PageLayout`] output
//! - `style`: text styles and [`LayoutConfig`]
//! - `defaults`: default sizes and page ratios
//! - `context`: per-group output collection
//! - `groups`: the callout, side and footer layout rules
//!
//! Items with a callout polygon each get a group of their own. All other
//! items are grouped by placement in order of first appearance, and each
//! group is sorted by item index. Groups are laid out independently and
//! merged in group order.

pub mod context;
pub mod defaults;
pub mod groups;
pub mod style;
pub mod types;

pub use context::RenderContext;
pub use groups::{CalloutGroup, FooterGroup, LayoutEnv, LayoutGroup, SideGroup, TextGroup};
pub use style::{LayoutConfig, Style, StyleInfo, StyleSheet};
pub use types::{
    Color, PageLayout, Placement, Shape, Side, Stroke, TextItem, TextRun, XLocation, YLocation,
};

use crate::errors::Result;
use crate::log::info;
use crate::text::TextMetrics;
use crate::types::Angle;

/// Grouping key for items laid out in a box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoxKey {
    Footer,
    Side(Side, XLocation, YLocation),
}

/// A page of a given pixel size and its layout settings
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub width: f64,
    pub height: f64,
    config: LayoutConfig,
}

impl Page {
    pub fn new(width: f64, height: f64) -> Self {
        Page {
            width,
            height,
            config: LayoutConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_style(&mut self, style: Style, info: StyleInfo) {
        self.config.styles.set(style, info);
    }

    pub fn set_pointer_angle(&mut self, angle: Angle) {
        self.config.pointer_angle = angle;
    }

    /// Split `items` into layout groups, callouts first
    pub fn groups(&self, items: &[TextItem]) -> Vec<TextGroup> {
        let mut groups: Vec<TextGroup> = Vec::new();
        let mut boxed: Vec<(BoxKey, Vec<TextItem>)> = Vec::new();

        for item in items {
            let key = match &item.placement {
                Placement::Callout(polygon) => {
                    groups.push(CalloutGroup::new(polygon.clone(), item.clone()).into());
                    continue;
                }
                Placement::Footer => BoxKey::Footer,
                Placement::Side { side, x, y } => BoxKey::Side(*side, *x, *y),
            };
            match boxed.iter_mut().find(|(k, _)| *k == key) {
                Some((_, members)) => members.push(item.clone()),
                None => boxed.push((key, vec![item.clone()])),
            }
        }

        for (key, mut members) in boxed {
            members.sort_by_key(|item| item.index);
            groups.push(match key {
                BoxKey::Footer => FooterGroup::new(members).into(),
                BoxKey::Side(side, x, y) => SideGroup::new(side, x, y, members).into(),
            });
        }

        groups
    }

    /// Lay out every item on the page.
    ///
    /// Fails on the first group that fails; nothing is returned for the
    /// groups that succeeded.
    pub fn layout<M: TextMetrics>(&self, items: &[TextItem], metrics: &M) -> Result<PageLayout> {
        let groups = self.groups(items);
        let env = LayoutEnv {
            width: self.width,
            height: self.height,
            config: &self.config,
            metrics,
        };

        #[cfg(feature = "rayon")]
        let outputs = {
            use rayon::prelude::*;
            groups.par_iter().map(|group| group.layout(&env)).collect::<Result<Vec<_>>>()?
        };
        #[cfg(not(feature = "rayon"))]
        let outputs = groups.iter().map(|group| group.layout(&env)).collect::<Result<Vec<_>>>()?;

        let mut page = RenderContext::new();
        for output in outputs {
            page.merge(output);
        }

        info!(
            groups = groups.len(),
            texts = page.texts.len(),
            highlights = page.highlights.len(),
            "page laid out"
        );
        Ok(page.into_page(self.width, self.height))
    }
}
