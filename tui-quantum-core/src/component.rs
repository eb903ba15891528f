//! The trait every slider, range, preview and phone control implements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A control that owns no application values
///
/// The value a control shows (a slider position, a phone number) arrives in
/// `Props` on every call, and a change leaves only as an action of type `A`
/// built by a callback in the same props. The application's reducer decides
/// whether to store it; the next render shows whatever it stored.
///
/// What a control may keep in `&mut self` is layout and gesture state: the
/// track area from the last render, whether the mouse button is held, the
/// active thumb, the preview zoom. Focus is not part of that state, it is a
/// prop.
///
/// ```ignore
/// use tui_quantum::{Component, EventKind, Frame, Rect, Scale};
///
/// struct Volume;
///
/// struct VolumeProps<'a> {
///     scale: &'a Scale,
///     value: f64,
///     is_focused: bool,
/// }
///
/// impl Component<AppAction> for Volume {
///     type Props<'a> = VolumeProps<'a>;
///
///     fn handle_event(
///         &mut self,
///         event: &EventKind,
///         props: Self::Props<'_>,
///     ) -> impl IntoIterator<Item = AppAction> {
///         let EventKind::Key(key) = event else {
///             return None;
///         };
///         let delta = match key.code {
///             KeyCode::Up => props.scale.key_step(),
///             KeyCode::Down => -props.scale.key_step(),
///             _ => return None,
///         };
///         props
///             .is_focused
///             .then(|| AppAction::SetVolume(props.scale.guard(props.value + delta)))
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         let text = format!("Volume: {}", props.scale.format(props.value));
///         frame.render_widget(Paragraph::new(text), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Values and callbacks supplied by the caller for one call
    type Props<'a>;

    /// React to one event
    ///
    /// The result is usually `None` or `Some(action)`; any
    /// `IntoIterator<Item = A>` works when one event produces several actions.
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A>;

    /// Draw into `area`, remembering whatever layout later events need
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
