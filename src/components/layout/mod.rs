//! Layout Components
//!
//! Header, section wrapper, footer and the centered page column.

pub mod footer;
pub mod header;
pub mod section;
pub mod shell;

use std::rc::Rc;

use gpui::{App, Div, SharedString, Window, div, prelude::*, px};
use gpui_component::h_flex;

use crate::constants::CONTENT_MAX_WIDTH;

/// Called with the anchor of a clicked link
pub type NavigateHandler = Rc<dyn Fn(&SharedString, &mut Window, &mut App) + 'static>;

/// Full-width row holding a centered column of at most the content width
pub fn centered(column: Div) -> Div {
    h_flex().w_full().justify_center().child(
        column
            .w_full()
            .max_w(px(CONTENT_MAX_WIDTH))
            .px_8(),
    )
}

/// An empty column for [`centered`]
pub fn column() -> Div {
    div().flex().flex_col()
}
