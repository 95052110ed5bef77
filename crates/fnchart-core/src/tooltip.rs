// File: crates/fnchart-core/src/tooltip.rs
// Summary: Tooltip items, formatting callbacks and the dataset filter.

use std::fmt;
use std::sync::Arc;

use crate::dataset::Y_AXIS;
use crate::numeric::{format_number, round2};
use crate::types::Point;

/// One candidate tooltip entry: which dataset/point it came from, its data
/// value and where it sits on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipItem {
    pub dataset_index: usize,
    pub data_index: usize,
    pub parsed: Point,
    pub px: (f32, f32),
}

pub type TitleCallback = Arc<dyn Fn(&[TooltipItem]) -> Vec<String> + Send + Sync>;
pub type LabelCallback = Arc<dyn Fn(&TooltipItem) -> String + Send + Sync>;
pub type FilterCallback = Arc<dyn Fn(&TooltipItem) -> bool + Send + Sync>;

/// Where the tooltip box is anchored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipPosition {
    /// At the item closest to the pointer.
    Nearest,
    /// At the mean position of all items.
    Average,
}

#[derive(Clone)]
pub struct TooltipCallbacks {
    pub title: TitleCallback,
    pub label: LabelCallback,
}

impl Default for TooltipCallbacks {
    fn default() -> Self {
        Self {
            title: Arc::new(|items: &[TooltipItem]| items.iter().map(format_title).collect()),
            label: Arc::new(format_label),
        }
    }
}

#[derive(Clone)]
pub struct TooltipOptions {
    pub enabled: bool,
    pub position: TooltipPosition,
    pub callbacks: TooltipCallbacks,
    pub filter: FilterCallback,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            position: TooltipPosition::Nearest,
            callbacks: TooltipCallbacks::default(),
            filter: Arc::new(function_only),
        }
    }
}

impl fmt::Debug for TooltipOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipOptions")
            .field("enabled", &self.enabled)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// `x = <x rounded to 2 places>`
pub fn format_title(item: &TooltipItem) -> String {
    format!("x = {}", format_number(round2(item.parsed.x)))
}

/// `f(x) = <y rounded to 2 places>`
pub fn format_label(item: &TooltipItem) -> String {
    format!("f(x) = {}", format_number(round2(item.parsed.y)))
}

/// Keeps entries from datasets after the two axis-reference segments.
pub fn function_only(item: &TooltipItem) -> bool {
    item.dataset_index > Y_AXIS
}

/// Resolved tooltip text plus its anchor on the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub title: Vec<String>,
    pub body: Vec<String>,
    pub items: Vec<TooltipItem>,
    pub anchor: (f32, f32),
}

impl TooltipOptions {
    /// Filter candidates and format the survivors. `None` when nothing survives
    /// or the tooltip is disabled. `pointer` picks the nearest anchor.
    pub fn resolve(&self, candidates: &[TooltipItem], pointer: (f32, f32)) -> Option<TooltipContent> {
        if !self.enabled {
            return None;
        }
        let items: Vec<TooltipItem> = candidates.iter().copied().filter(|it| (self.filter)(it)).collect();
        if items.is_empty() {
            return None;
        }
        let title = (self.callbacks.title)(&items);
        let body = items.iter().map(|it| (self.callbacks.label)(it)).collect();
        let anchor = match self.position {
            TooltipPosition::Nearest => nearest_anchor(&items, pointer),
            TooltipPosition::Average => average_anchor(&items),
        };
        Some(TooltipContent { title, body, items, anchor })
    }
}

fn nearest_anchor(items: &[TooltipItem], pointer: (f32, f32)) -> (f32, f32) {
    items
        .iter()
        .map(|it| it.px)
        .min_by(|a, b| {
            crate::geometry::distance(*a, pointer).total_cmp(&crate::geometry::distance(*b, pointer))
        })
        .unwrap_or(pointer)
}

fn average_anchor(items: &[TooltipItem]) -> (f32, f32) {
    let n = items.len().max(1) as f32;
    let (sx, sy) = items.iter().fold((0.0, 0.0), |acc, it| (acc.0 + it.px.0, acc.1 + it.px.1));
    (sx / n, sy / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(dataset_index: usize, x: f64, y: f64) -> TooltipItem {
        TooltipItem { dataset_index, data_index: 0, parsed: Point::new(x, y), px: (x as f32, y as f32) }
    }

    #[test]
    fn only_function_entries_survive() {
        let opts = TooltipOptions::default();
        let list = [item(0, 1.0, 0.0), item(1, 0.0, 1.0), item(2, 1.5, 2.675)];
        let content = opts.resolve(&list, (0.0, 0.0)).expect("function entry survives");
        assert_eq!(content.items.len(), 1);
        assert_eq!(content.items[0].dataset_index, 2);
        assert_eq!(content.title, vec!["x = 1.5".to_string()]);
        assert_eq!(content.body, vec!["f(x) = 2.68".to_string()]);
    }

    #[test]
    fn axis_only_candidates_produce_nothing() {
        let opts = TooltipOptions::default();
        assert!(opts.resolve(&[item(0, 1.0, 0.0), item(1, 0.0, 1.0)], (0.0, 0.0)).is_none());
    }

    #[test]
    fn disabled_tooltip_produces_nothing() {
        let mut opts = TooltipOptions::default();
        opts.enabled = false;
        assert!(opts.resolve(&[item(2, 1.0, 1.0)], (0.0, 0.0)).is_none());
    }

    #[test]
    fn average_anchor_is_mean() {
        let mut opts = TooltipOptions::default();
        opts.position = TooltipPosition::Average;
        let c = opts.resolve(&[item(2, 0.0, 0.0), item(2, 10.0, 4.0)], (0.0, 0.0)).unwrap();
        assert_eq!(c.anchor, (5.0, 2.0));
    }

    #[test]
    fn callbacks_can_be_replaced() {
        let mut opts = TooltipOptions::default();
        opts.callbacks.label = Arc::new(|it: &TooltipItem| format!("y={}", it.parsed.y));
        opts.filter = Arc::new(|_: &TooltipItem| true);
        let c = opts.resolve(&[item(0, 0.0, 3.0)], (0.0, 0.0)).unwrap();
        assert_eq!(c.body, vec!["y=3".to_string()]);
    }
}
