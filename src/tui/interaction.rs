//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and pointer
//! events are routed to the matching region afterwards. Regions carry a
//! semantic id, so the drag handler can ask "which board row is under the
//! pointer" without re-deriving any layout math.

use ratatui::layout::Rect;

use crate::columns::ListSide;
use crate::events::Action;
use crate::form::FocusId;

/// Rectangular screen region in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Semantic identity of an interactive region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionId {
    /// A row of the form field list
    FormRow(FocusId),
    /// The body of one board pane (drop target for drags)
    BoardPane(ListSide),
    /// One item row of a board pane
    BoardItem { side: ListSide, index: usize },
    /// One row of an open picker popup
    PickerRow(usize),
}

/// An interactive region that can respond to pointer events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    pub id: RegionId,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch when a second click lands within the
    /// double-click window (falls back to `on_click` when absent)
    pub on_double_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first).
    /// Popups use this to capture clicks over the underlying form.
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: RegionId, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_double_click: None,
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    /// Add a double-click action (builder pattern)
    pub fn with_double_click(mut self, action: Action) -> Self {
        self.on_double_click = Some(action);
        self
    }

    /// Add scroll actions (builder pattern)
    pub fn with_scroll(mut self, scroll_up: Action, scroll_down: Action) -> Self {
        self.on_scroll_up = Some(scroll_up);
        self.on_scroll_down = Some(scroll_down);
        self
    }

    /// Set the priority (builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Highest-priority region containing the point and satisfying `pred`.
    fn best_match(
        &self,
        x: u16,
        y: u16,
        pred: impl Fn(&InteractiveRegion) -> bool,
    ) -> Option<&InteractiveRegion> {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y) && pred(r))
            .max_by_key(|r| r.priority)
    }

    /// Highest-priority region under the pointer, if any.
    pub fn hit(&self, x: u16, y: u16) -> Option<&InteractiveRegion> {
        self.best_match(x, y, |_| true)
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn scroll_up_action(&self, x: u16, y: u16) -> Action {
        self.best_match(x, y, |r| r.on_scroll_up.is_some())
            .and_then(|r| r.on_scroll_up.clone())
            .unwrap_or(Action::None)
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn scroll_down_action(&self, x: u16, y: u16) -> Action {
        self.best_match(x, y, |r| r.on_scroll_down.is_some())
            .and_then(|r| r.on_scroll_down.clone())
            .unwrap_or(Action::None)
    }

    /// Board row under the pointer, for drag resolution.
    pub fn board_item_at(&self, x: u16, y: u16) -> Option<(ListSide, usize)> {
        self.best_match(x, y, |r| matches!(r.id, RegionId::BoardItem { .. }))
            .and_then(|r| match r.id {
                RegionId::BoardItem { side, index } => Some((side, index)),
                _ => None,
            })
    }

    /// Board pane under the pointer, for drops past the last row.
    pub fn board_pane_at(&self, x: u16, y: u16) -> Option<ListSide> {
        self.best_match(x, y, |r| matches!(r.id, RegionId::BoardPane(_)))
            .and_then(|r| match r.id {
                RegionId::BoardPane(side) => Some(side),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region = InteractiveRegion::clickable(
            RegionId::PickerRow(0),
            ClickRegion::new(10, 10, 20, 10),
            Action::None,
        );

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        // A popup row overlapping a form row must win
        registry.register(InteractiveRegion::clickable(
            RegionId::FormRow(FocusId::MainAssemblyName),
            ClickRegion::new(0, 0, 100, 100),
            Action::FocusField(FocusId::MainAssemblyName),
        ));
        registry.register(
            InteractiveRegion::clickable(
                RegionId::PickerRow(3),
                ClickRegion::new(20, 20, 60, 60),
                Action::PickerSet(3),
            )
            .with_priority(10),
        );

        assert_eq!(
            registry.hit(50, 50).map(|r| r.id),
            Some(RegionId::PickerRow(3))
        );
        assert_eq!(
            registry.hit(5, 5).map(|r| r.id),
            Some(RegionId::FormRow(FocusId::MainAssemblyName))
        );
    }

    #[test]
    fn test_board_item_lookup() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractiveRegion::clickable(
            RegionId::BoardPane(ListSide::Selected),
            ClickRegion::new(40, 0, 40, 20),
            Action::None,
        ));
        registry.register(
            InteractiveRegion::clickable(
                RegionId::BoardItem {
                    side: ListSide::Selected,
                    index: 2,
                },
                ClickRegion::new(41, 3, 38, 1),
                Action::BoardSelectAt {
                    side: ListSide::Selected,
                    index: 2,
                },
            )
            .with_priority(1),
        );

        assert_eq!(
            registry.board_item_at(50, 3),
            Some((ListSide::Selected, 2))
        );
        assert_eq!(registry.board_item_at(50, 10), None);
        assert_eq!(registry.board_pane_at(50, 10), Some(ListSide::Selected));
    }

    #[test]
    fn test_scroll_actions_fall_through() {
        let mut registry = InteractionRegistry::new();
        registry.register(
            InteractiveRegion::clickable(
                RegionId::BoardPane(ListSide::Available),
                ClickRegion::new(0, 0, 10, 10),
                Action::None,
            )
            .with_scroll(
                Action::BoardScrollUp(ListSide::Available, 3),
                Action::BoardScrollDown(ListSide::Available, 3),
            ),
        );

        assert_eq!(
            registry.scroll_up_action(5, 5),
            Action::BoardScrollUp(ListSide::Available, 3)
        );
        assert_eq!(registry.scroll_up_action(50, 50), Action::None);
    }
}
