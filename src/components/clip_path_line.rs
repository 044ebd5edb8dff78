// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Full-window canvas widget running the clipped-rect / path-line animation
//!
//! The widget owns the whole animation:
//!
//! - **Pointer down** asks the current node to start a transition and, if it
//!   did, starts the frame driver and requests the first animation frame
//! - **Animation frames** feed elapsed time to the frame driver, which runs
//!   sequence controller ticks at a fixed pace until a transition completes
//! - **Paint** clears to the background and draws the current node
//!
//! Completed transitions are reported to the app as `NodeChanged` actions.

use std::marker::PhantomData;
use std::time::Duration;

use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PropertiesMut, PropertiesRef, RegisterCtx, Update,
    UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::vello::Scene;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

use crate::animation::{Direction, FrameDriver, SequenceController};
use crate::render::{Figure, paint_background, paint_figure};
use crate::theme;

/// Action emitted when a transition completes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeChanged {
    /// Palette index of the node now current
    pub index: usize,
    /// Traversal direction for the next transition
    pub direction: Direction,
}

/// The animation canvas widget
pub struct ClipPathLineWidget {
    controller: SequenceController,
    driver: FrameDriver,
}

impl ClipPathLineWidget {
    pub fn new() -> Self {
        Self {
            controller: SequenceController::new(),
            driver: FrameDriver::new(),
        }
    }

    /// Handle a tap. Returns `true` if the frame loop needs kicking off.
    fn handle_tap(&mut self) -> bool {
        if !self.controller.start_updating() {
            tracing::debug!("Tap ignored, node {} mid-transition", self.controller.current_index());
            return false;
        }
        tracing::debug!("Tap started node {}", self.controller.current_index());
        self.driver.start()
    }

    /// Run the ticks due after `elapsed`, reporting a completed transition.
    fn tick(&mut self, elapsed: Duration) -> Option<NodeChanged> {
        let controller = &mut self.controller;
        self.driver.drive(elapsed, || {
            let step = controller.update();
            step.is_complete().then(|| {
                tracing::info!(
                    "Transition complete ({:?}), now on node {}",
                    step,
                    controller.current_index()
                );
                NodeChanged {
                    index: controller.current_index(),
                    direction: controller.direction(),
                }
            })
        })
    }

    fn current_figure(&self, size: Size) -> Figure {
        let node = self.controller.current_node();
        Figure::new(node.index, node.state.scale, size)
    }
}

impl Default for ClipPathLineWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ClipPathLineWidget {
    type Action = NodeChanged;

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {
        // Leaf widget - no children
    }

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        // Fill the window
        bc.max()
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        let canvas_size = ctx.size();
        paint_background(scene, canvas_size, theme::canvas::BACKGROUND);
        paint_figure(scene, &self.current_figure(canvas_size));
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        if let PointerEvent::Down(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            ..
        }) = event
            && self.handle_tap()
        {
            ctx.request_anim_frame();
            ctx.request_render();
        }
    }

    fn on_anim_frame(
        &mut self,
        ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        interval: u64,
    ) {
        if !self.driver.is_running() {
            return;
        }

        if let Some(change) = self.tick(Duration::from_nanos(interval)) {
            ctx.submit_action::<NodeChanged>(change);
        }

        ctx.request_render();
        if self.driver.is_running() {
            ctx.request_anim_frame();
        }
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        let index = self.controller.current_index();
        node.set_label(format!(
            "Animated figure in {}, tap to animate",
            theme::palette::NAMES[index]
        ));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}

// ===== Xilem View Wrapper =====

/// Create the animation canvas view
///
/// The callback runs each time a transition completes.
pub fn clip_path_line_view<State, F>(on_node_changed: F) -> ClipPathLineView<State, F>
where
    F: Fn(&mut State, NodeChanged),
{
    ClipPathLineView {
        on_node_changed,
        phantom: PhantomData,
    }
}

/// The Xilem View for ClipPathLineWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct ClipPathLineView<State, F> {
    on_node_changed: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for ClipPathLineView<State, F> {}

impl<State: 'static, F: Fn(&mut State, NodeChanged) + 'static> View<State, (), ViewCtx>
    for ClipPathLineView<State, F>
{
    type Element = Pod<ClipPathLineWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let pod = ctx.create_pod(ClipPathLineWidget::new());
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        _prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        // Animation state lives in the widget; nothing to push down
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<NodeChanged>() {
            Some(change) => {
                (self.on_node_changed)(app_state, *change);
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
