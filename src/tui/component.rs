use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may borrow
/// persistent presentation state (e.g. a `ListState`) mutably, and render
/// into a given `Rect`.
///
/// `render` takes `&mut self` so components can update that borrowed state
/// (scroll offsets, selection) during the render pass.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
